//! Ordered assembly of assertion attributes.
//!
//! Attributes are appended in four stages: authorities, principal identity
//! fields, static recipient attributes, then profile field mappings. The
//! builder's type parameter tracks which stage comes next, so a stage can
//! neither be skipped nor appended out of order.

use std::marker::PhantomData;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use super::{AssertionAttribute, values::render_static_value};
use crate::auth::AuthenticatedPrincipal;

/// Stage markers for [`AttributeListBuilder`].
pub mod stage {
    /// Awaiting the authorities attribute.
    #[derive(Debug)]
    pub enum Authorities {}
    /// Awaiting the fixed principal attributes.
    #[derive(Debug)]
    pub enum Principal {}
    /// Awaiting static recipient attributes.
    #[derive(Debug)]
    pub enum Static {}
    /// Awaiting profile field mappings.
    #[derive(Debug)]
    pub enum Mapped {}
    /// All stages appended.
    #[derive(Debug)]
    pub enum Complete {}
}

/// Name of the attribute carrying the principal's authorities.
pub const AUTHORITIES_ATTRIBUTE: &str = "authorities";

#[derive(Debug)]
pub struct AttributeListBuilder<S> {
    attributes: Vec<AssertionAttribute>,
    _stage: PhantomData<S>,
}

impl<S> AttributeListBuilder<S> {
    fn advance<N>(self) -> AttributeListBuilder<N> {
        AttributeListBuilder {
            attributes: self.attributes,
            _stage: PhantomData,
        }
    }

    /// Attributes appended so far.
    pub fn attributes(&self) -> &[AssertionAttribute] {
        &self.attributes
    }
}

impl Default for AttributeListBuilder<stage::Authorities> {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeListBuilder<stage::Authorities> {
    pub fn new() -> Self {
        Self {
            attributes: Vec::new(),
            _stage: PhantomData,
        }
    }

    /// Append the `authorities` attribute. Order is kept and duplicates are
    /// not removed; an empty list still produces the attribute.
    pub fn authorities(mut self, authorities: &[String]) -> AttributeListBuilder<stage::Principal> {
        self.attributes.push(AssertionAttribute::new(
            AUTHORITIES_ATTRIBUTE,
            authorities.to_vec(),
        ));
        self.advance()
    }
}

impl AttributeListBuilder<stage::Principal> {
    /// Append `email`, `id`, `name`, `origin` and `zoneId`, blank or not.
    pub fn principal(
        mut self,
        principal: &AuthenticatedPrincipal,
    ) -> AttributeListBuilder<stage::Static> {
        self.attributes.extend([
            AssertionAttribute::single("email", &principal.email),
            AssertionAttribute::single("id", &principal.id),
            AssertionAttribute::single("name", &principal.name),
            AssertionAttribute::single("origin", &principal.origin),
            AssertionAttribute::single("zoneId", &principal.zone_id),
        ]);
        self.advance()
    }
}

impl AttributeListBuilder<stage::Static> {
    /// Append configured static attributes in configuration order.
    /// Entries whose value is absent are skipped.
    pub fn static_attributes(
        mut self,
        static_attributes: Option<&IndexMap<String, Option<JsonValue>>>,
    ) -> AttributeListBuilder<stage::Mapped> {
        for (name, value) in static_attributes.into_iter().flatten() {
            let Some(value) = value else {
                continue;
            };
            self.attributes
                .push(AssertionAttribute::new(name, render_static_value(value)));
        }
        self.advance()
    }
}

impl AttributeListBuilder<stage::Mapped> {
    /// Append single-valued `(attribute name, value)` pairs resolved from
    /// field mappings.
    pub fn mapped<I>(mut self, mapped: I) -> AttributeListBuilder<stage::Complete>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.attributes.extend(
            mapped
                .into_iter()
                .map(|(name, value)| AssertionAttribute::single(name, value)),
        );
        self.advance()
    }
}

impl AttributeListBuilder<stage::Complete> {
    pub fn build(self) -> Vec<AssertionAttribute> {
        self.attributes
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn names(attributes: &[AssertionAttribute]) -> Vec<&str> {
        attributes.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn test_stage_order() {
        let principal = AuthenticatedPrincipal::new("u1", "ada", "ada@example.com", "uaa", "z1");
        let mut statics = IndexMap::new();
        statics.insert("email".to_string(), Some(json!("static@example.com")));

        let attributes = AttributeListBuilder::new()
            .authorities(&["openid".to_string()])
            .principal(&principal)
            .static_attributes(Some(&statics))
            .mapped([("firstName".to_string(), "Ada".to_string())])
            .build();

        assert_eq!(
            names(&attributes),
            vec!["authorities", "email", "id", "name", "origin", "zoneId", "email", "firstName"]
        );
    }

    #[test]
    fn test_absent_static_value_skipped() {
        let mut statics = IndexMap::new();
        statics.insert("missing".to_string(), None);
        statics.insert("level".to_string(), Some(JsonValue::Null));

        let builder = AttributeListBuilder::new()
            .authorities(&[])
            .principal(&AuthenticatedPrincipal::default())
            .static_attributes(Some(&statics));

        let last = builder.attributes().last().unwrap();
        assert_eq!(last.name, "level");
        assert_eq!(last.values, vec!["null"]);
        assert_eq!(builder.attributes().len(), 7);
    }

    #[test]
    fn test_no_static_configuration() {
        let attributes = AttributeListBuilder::new()
            .authorities(&[])
            .principal(&AuthenticatedPrincipal::default())
            .static_attributes(None)
            .mapped(Vec::new())
            .build();
        assert_eq!(attributes.len(), 6);
    }
}
