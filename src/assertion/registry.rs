use std::collections::HashMap;

use crate::{config::ServiceProviderConfig, models::AttributeMappingConfig};

/// Attribute configuration for every known federation recipient, keyed by
/// (entity id, zone id).
#[derive(Debug, Default, Clone)]
pub struct ServiceProviderRegistry {
    providers: HashMap<(String, String), AttributeMappingConfig>,
}

impl ServiceProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configured service providers. A later entry for
    /// the same (entity id, zone id) replaces an earlier one.
    pub fn from_configs<'a, I>(configs: I) -> Self
    where
        I: IntoIterator<Item = &'a ServiceProviderConfig>,
    {
        let mut registry = Self::new();
        for sp in configs {
            registry.register(&sp.entity_id, &sp.zone_id, sp.config.clone());
        }
        registry
    }

    pub fn register(
        &mut self,
        entity_id: impl Into<String>,
        zone_id: impl Into<String>,
        config: AttributeMappingConfig,
    ) {
        let (entity_id, zone_id) = (entity_id.into(), zone_id.into());
        tracing::debug!(entity_id = %entity_id, zone_id = %zone_id, "Registered service provider");
        self.providers.insert((entity_id, zone_id), config);
    }

    pub fn retrieve(&self, entity_id: &str, zone_id: &str) -> Option<&AttributeMappingConfig> {
        self.providers
            .get(&(entity_id.to_string(), zone_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieve_is_zone_scoped() {
        let mut registry = ServiceProviderRegistry::new();
        registry.register(
            "https://sp.example.com",
            "z1",
            AttributeMappingConfig::new().with_static_attribute("dept", "eng"),
        );

        assert!(registry.retrieve("https://sp.example.com", "z1").is_some());
        assert!(registry.retrieve("https://sp.example.com", "z2").is_none());
        assert!(registry.retrieve("https://other.example.com", "z1").is_none());
    }

    #[test]
    fn test_from_configs() {
        let configs = vec![
            ServiceProviderConfig {
                entity_id: "sp-a".into(),
                zone_id: "uaa".into(),
                config: AttributeMappingConfig::new(),
            },
            ServiceProviderConfig {
                entity_id: "sp-b".into(),
                zone_id: "uaa".into(),
                config: AttributeMappingConfig::new().with_field_mapping("email", "mail"),
            },
        ];

        let registry = ServiceProviderRegistry::from_configs(&configs);

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.retrieve("sp-b", "uaa").unwrap().mapped_name("email"),
            Some("mail")
        );
    }
}
