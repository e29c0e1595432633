//! Human-readable audit details for identity mutations.
//!
//! # Detail Shapes
//!
//! ```text
//! Created:  user_id, username, user_origin [, performed_by]
//!   - Unauthenticated           no performed_by
//!   - AuthenticatedUser         performed_by={id}|{name}
//!   - AuthenticatedClient       performed_by=<unknown>|{client}
//!   - TokenAuthenticatedClient  performed_by={zid claim or ""}|{client}
//!
//! Deleted:  user_id, username, user_origin, then
//!   - AuthenticatedUser         deleted_by_user_id, deleted_by_username
//!   - anything else             deleted_by_client_id={client}
//!
//! Modified, Verified, EmailChanged:  user_id, username
//! ```
//!
//! Token decoding is best effort: a token that cannot be decoded degrades
//! the zone segment to an empty string and never fails the event.

use super::event::MutationEvent;
use crate::{
    auth::{ActingContext, TokenClaimsDecoder, UNKNOWN},
    models::UserEventKind,
};

/// Builds the ordered `key=value` detail strings for a mutation event.
#[derive(Debug, Clone, Default)]
pub struct AuditDescriptorBuilder<D> {
    decoder: D,
}

impl<D: TokenClaimsDecoder> AuditDescriptorBuilder<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn build_details(&self, event: &MutationEvent, acting: &ActingContext) -> Vec<String> {
        let user = event.user();
        let mut details = vec![
            format!("user_id={}", user.id),
            format!("username={}", user.username),
        ];

        match event.kind() {
            UserEventKind::Created => {
                details.push(format!("user_origin={}", user.origin));
                match acting {
                    ActingContext::Unauthenticated => {}
                    ActingContext::AuthenticatedUser { id, name } => {
                        details.push(format!("performed_by={}|{}", id, name));
                    }
                    ActingContext::AuthenticatedClient { client } => {
                        details.push(format!("performed_by={}|{}", UNKNOWN, client));
                    }
                    ActingContext::TokenAuthenticatedClient { client, token } => {
                        let zone_id = self.token_zone_id(token);
                        details.push(format!("performed_by={}|{}", zone_id, client));
                    }
                }
            }
            UserEventKind::Deleted => {
                details.push(format!("user_origin={}", user.origin));
                match acting {
                    ActingContext::AuthenticatedUser { id, name } => {
                        details.push(format!("deleted_by_user_id={}", id));
                        details.push(format!("deleted_by_username={}", name));
                    }
                    ActingContext::Unauthenticated
                    | ActingContext::AuthenticatedClient { .. }
                    | ActingContext::TokenAuthenticatedClient { .. } => {
                        details.push(format!(
                            "deleted_by_client_id={}",
                            acting.principal_description()
                        ));
                    }
                }
            }
            UserEventKind::Modified | UserEventKind::Verified | UserEventKind::EmailChanged => {}
        }

        details
    }

    /// Zone claim of a bearer token, or an empty string when it cannot be read.
    fn token_zone_id(&self, token: &str) -> String {
        match self.decoder.decode(token) {
            Ok(claims) => claims.zid.unwrap_or_default(),
            Err(e) => {
                tracing::debug!(error = %e, "Could not decode acting token for audit provenance");
                String::new()
            }
        }
    }
}
