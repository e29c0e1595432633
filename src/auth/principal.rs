//! Authenticated principal and acting-context abstractions.
//!
//! An [`AuthenticatedPrincipal`] is the identity an outbound assertion is
//! issued for. An [`ActingContext`] is a snapshot of "who performed this
//! mutation", taken from the ambient authentication at the moment an audit
//! record is built.
//!
//! # Acting Context Kinds
//!
//! ```text
//! Unauthenticated          - no caller, e.g. a federated login creating a shadow user
//! AuthenticatedUser        - a human user session (id + name)
//! AuthenticatedClient      - a client credential without an inspectable token
//! TokenAuthenticatedClient - a client presenting a bearer token whose claims carry a zone id
//! ```

use serde::{Deserialize, Serialize};

/// Placeholder rendered when an acting value cannot be resolved.
pub const UNKNOWN: &str = "<unknown>";

/// The authenticated identity an assertion is composed for.
///
/// Owned by the authentication context for the duration of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    /// Identity ID.
    pub id: String,
    /// Display name (typically the username).
    pub name: String,
    /// Primary email address.
    pub email: String,
    /// Source authentication method (e.g. `uaa`, `ldap`, a federated IdP alias).
    pub origin: String,
    /// Owning identity zone.
    pub zone_id: String,
}

impl AuthenticatedPrincipal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        origin: impl Into<String>,
        zone_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            origin: origin.into(),
            zone_id: zone_id.into(),
        }
    }
}

/// Who performed an identity mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActingContext {
    /// No authenticated caller (anonymous or not yet authenticated).
    Unauthenticated,

    /// A human user.
    AuthenticatedUser {
        /// User ID.
        id: String,
        /// Username.
        name: String,
    },

    /// A client credential.
    AuthenticatedClient {
        /// Principal description of the client (usually its client id).
        client: String,
    },

    /// A client authenticated by a bearer token.
    TokenAuthenticatedClient {
        /// Principal description of the client.
        client: String,
        /// Raw token value, decoded on demand for its zone claim.
        token: String,
    },
}

impl ActingContext {
    pub fn user(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::AuthenticatedUser {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn client(client: impl Into<String>) -> Self {
        Self::AuthenticatedClient {
            client: client.into(),
        }
    }

    pub fn token_client(client: impl Into<String>, token: impl Into<String>) -> Self {
        Self::TokenAuthenticatedClient {
            client: client.into(),
            token: token.into(),
        }
    }

    /// Whether an authenticated caller is present.
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Unauthenticated)
    }

    /// The principal description used in client-provenance fields.
    ///
    /// Users render as their name; an unauthenticated context renders as
    /// [`UNKNOWN`].
    pub fn principal_description(&self) -> &str {
        match self {
            Self::Unauthenticated => UNKNOWN,
            Self::AuthenticatedUser { name, .. } => name,
            Self::AuthenticatedClient { client } => client,
            Self::TokenAuthenticatedClient { client, .. } => client,
        }
    }

    /// The origin tag attached to audit records produced under this context.
    pub fn origin_tag(&self) -> String {
        match self {
            Self::Unauthenticated => format!("caller={}", UNKNOWN),
            Self::AuthenticatedUser { name, .. } => format!("caller={}", name),
            Self::AuthenticatedClient { client } | Self::TokenAuthenticatedClient { client, .. } => {
                format!("client={}", client)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_description_per_kind() {
        assert_eq!(ActingContext::Unauthenticated.principal_description(), UNKNOWN);
        assert_eq!(ActingContext::user("u1", "ada").principal_description(), "ada");
        assert_eq!(ActingContext::client("admin").principal_description(), "admin");
        assert_eq!(
            ActingContext::token_client("admin", "raw").principal_description(),
            "admin"
        );
    }

    #[test]
    fn test_origin_tag() {
        assert_eq!(ActingContext::Unauthenticated.origin_tag(), "caller=<unknown>");
        assert_eq!(ActingContext::user("u1", "ada").origin_tag(), "caller=ada");
        assert_eq!(ActingContext::client("admin").origin_tag(), "client=admin");
        assert_eq!(
            ActingContext::token_client("scim", "raw").origin_tag(),
            "client=scim"
        );
    }

    #[test]
    fn test_is_authenticated() {
        assert!(!ActingContext::Unauthenticated.is_authenticated());
        assert!(ActingContext::client("admin").is_authenticated());
    }

    #[test]
    fn test_acting_context_serializes_tagged() {
        let json = serde_json::to_value(ActingContext::user("u1", "ada")).unwrap();
        assert_eq!(json["type"], "authenticated_user");
        assert_eq!(json["id"], "u1");
    }
}
