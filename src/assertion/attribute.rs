use serde::{Deserialize, Serialize};

/// SAML 2.0 basic attribute name format, used for every attribute this crate emits.
pub const ATTRNAME_FORMAT_BASIC: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:basic";

/// A named, multi-valued attribute attached to an outbound assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssertionAttribute {
    pub name: String,
    /// Always equal to `name`.
    pub friendly_name: String,
    pub name_format: String,
    /// Single-valued attributes carry a one-element list.
    pub values: Vec<String>,
}

impl AssertionAttribute {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        let name = name.into();
        Self {
            friendly_name: name.clone(),
            name,
            name_format: ATTRNAME_FORMAT_BASIC.to_string(),
            values,
        }
    }

    pub fn single(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, vec![value.into()])
    }
}
