use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AttributeMappingConfig;

/// A federation recipient (SAML service provider) and its attribute configuration.
///
/// ```toml
/// [[service_providers]]
/// entity_id = "https://sp.example.com"
/// zone_id = "uaa"
///
/// [service_providers.config.static_attributes]
/// dept = ["eng", "infra"]
///
/// [service_providers.config.attribute_mappings]
/// given_name = "firstName"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ServiceProviderConfig {
    /// Entity ID of the service provider.
    #[validate(length(min = 1, max = 1024))]
    pub entity_id: String,

    /// Identity zone the service provider is registered in.
    #[serde(default = "default_zone_id")]
    #[validate(length(min = 1, max = 255))]
    pub zone_id: String,

    /// Static attributes and profile field mappings.
    #[serde(default)]
    pub config: AttributeMappingConfig,
}

/// Zone used when a service provider does not name one.
pub const DEFAULT_ZONE_ID: &str = "uaa";

fn default_zone_id() -> String {
    DEFAULT_ZONE_ID.to_string()
}
