use super::{
    AssertionAttribute,
    compose::{ComposeError, compose},
    lookup::ProfileLookup,
    registry::ServiceProviderRegistry,
};
use crate::auth::AuthenticatedPrincipal;

#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    #[error("No service provider {entity_id} registered in zone {zone_id}")]
    RecipientNotFound { entity_id: String, zone_id: String },

    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Entry point used when issuing an assertion to a federation recipient.
pub struct AssertionAttributeService<L> {
    registry: ServiceProviderRegistry,
    lookup: L,
}

impl<L: ProfileLookup> AssertionAttributeService<L> {
    pub fn new(registry: ServiceProviderRegistry, lookup: L) -> Self {
        Self { registry, lookup }
    }

    pub fn registry(&self) -> &ServiceProviderRegistry {
        &self.registry
    }

    /// Compose the attributes for `recipient_entity_id`, resolved in the
    /// principal's zone.
    #[tracing::instrument(
        skip(self, principal, authorities),
        fields(principal_id = %principal.id, zone_id = %principal.zone_id)
    )]
    pub fn attributes_for(
        &self,
        principal: &AuthenticatedPrincipal,
        authorities: &[String],
        recipient_entity_id: &str,
    ) -> Result<Vec<AssertionAttribute>, AssertionError> {
        let config = self
            .registry
            .retrieve(recipient_entity_id, &principal.zone_id)
            .ok_or_else(|| {
                tracing::warn!("Assertion requested for unregistered service provider");
                AssertionError::RecipientNotFound {
                    entity_id: recipient_entity_id.to_string(),
                    zone_id: principal.zone_id.clone(),
                }
            })?;

        let attributes = compose(principal, authorities, Some(config), &self.lookup)?;
        tracing::debug!(attributes = attributes.len(), "Composed assertion attributes");
        Ok(attributes)
    }
}
