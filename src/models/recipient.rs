use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value as JsonValue;

/// Per-recipient attribute configuration for outbound assertions.
///
/// Iteration order of both maps is the order in which entries were
/// configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeMappingConfig {
    /// Literal attributes appended to every assertion for this recipient.
    ///
    /// `None` marks a value that is entirely absent; such entries are
    /// skipped, and left out when serialized. A JSON `null` deserializes to
    /// `Some(Null)` and is emitted as the string `"null"`.
    #[serde(
        default,
        serialize_with = "serialize_present_values",
        deserialize_with = "deserialize_present_values"
    )]
    pub static_attributes: IndexMap<String, Option<JsonValue>>,

    /// Source profile field key (`given_name`, `family_name`, `phone_number`,
    /// `email`) to output attribute name.
    #[serde(default, alias = "attribute_mappings")]
    pub field_mappings: IndexMap<String, String>,
}

impl AttributeMappingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Self {
        self.static_attributes
            .insert(name.into(), Some(value.into()));
        self
    }

    /// Register a static attribute whose value is absent.
    pub fn with_absent_static_attribute(mut self, name: impl Into<String>) -> Self {
        self.static_attributes.insert(name.into(), None);
        self
    }

    pub fn with_field_mapping(
        mut self,
        source_key: impl Into<String>,
        attribute_name: impl Into<String>,
    ) -> Self {
        self.field_mappings
            .insert(source_key.into(), attribute_name.into());
        self
    }

    /// Look up the non-empty output attribute name mapped to a source key.
    pub fn mapped_name(&self, source_key: &str) -> Option<&str> {
        self.field_mappings
            .get(source_key)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

fn serialize_present_values<S>(
    values: &IndexMap<String, Option<JsonValue>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let present = values.iter().filter(|(_, v)| v.is_some()).count();
    let mut map = serializer.serialize_map(Some(present))?;
    for (name, value) in values {
        if let Some(value) = value {
            map.serialize_entry(name, value)?;
        }
    }
    map.end()
}

/// Every value that appears in a document is present, including `null`.
fn deserialize_present_values<'de, D>(
    deserializer: D,
) -> Result<IndexMap<String, Option<JsonValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = IndexMap::<String, JsonValue>::deserialize(deserializer)?;
    Ok(values.into_iter().map(|(k, v)| (k, Some(v))).collect())
}
