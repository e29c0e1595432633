use super::{
    AssertionAttribute,
    builder::AttributeListBuilder,
    lookup::{ProfileLookup, ProfileLookupError},
    values::has_text,
};
use crate::{
    auth::AuthenticatedPrincipal,
    models::{AttributeMappingConfig, UserProfile},
};

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Failed to resolve profile for attribute mappings: {0}")]
    Profile(#[from] ProfileLookupError),
}

/// Profile fields that a recipient may map to attributes of its choosing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedField {
    GivenName,
    FamilyName,
    PhoneNumber,
    Email,
}

impl MappedField {
    /// Recognized fields, in the order they are emitted.
    pub const ALL: [MappedField; 4] = [
        MappedField::GivenName,
        MappedField::FamilyName,
        MappedField::PhoneNumber,
        MappedField::Email,
    ];

    /// Configuration key for this field.
    pub fn key(&self) -> &'static str {
        match self {
            Self::GivenName => "given_name",
            Self::FamilyName => "family_name",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
        }
    }

    fn value<'a>(&self, profile: &'a UserProfile) -> Option<&'a str> {
        match self {
            Self::GivenName => profile.given_name(),
            Self::FamilyName => profile.family_name(),
            Self::PhoneNumber => profile.phone_number(),
            Self::Email => profile.primary_email(),
        }
    }
}

/// Compose the ordered attribute list for an outbound assertion.
///
/// The profile lookup runs at most once, and only when the recipient
/// configuration has field mappings.
pub fn compose<L>(
    principal: &AuthenticatedPrincipal,
    authorities: &[String],
    config: Option<&AttributeMappingConfig>,
    lookup: &L,
) -> Result<Vec<AssertionAttribute>, ComposeError>
where
    L: ProfileLookup + ?Sized,
{
    let builder = AttributeListBuilder::new()
        .authorities(authorities)
        .principal(principal)
        .static_attributes(config.map(|c| &c.static_attributes));

    let mapped = match config {
        Some(config) if !config.field_mappings.is_empty() => {
            mapped_profile_attributes(principal, config, lookup)?
        }
        _ => Vec::new(),
    };

    Ok(builder.mapped(mapped).build())
}

fn mapped_profile_attributes<L>(
    principal: &AuthenticatedPrincipal,
    config: &AttributeMappingConfig,
    lookup: &L,
) -> Result<Vec<(String, String)>, ComposeError>
where
    L: ProfileLookup + ?Sized,
{
    let profile = lookup.lookup(&principal.id, &principal.zone_id)?;

    let mapped: Vec<(String, String)> = MappedField::ALL
        .iter()
        .filter_map(|field| {
            let name = config.mapped_name(field.key())?;
            let value = field.value(&profile).filter(|v| has_text(v))?;
            Some((name.to_string(), value.to_string()))
        })
        .collect();

    tracing::debug!(
        principal_id = %principal.id,
        zone_id = %principal.zone_id,
        mapped = mapped.len(),
        "Resolved configurable assertion attributes"
    );

    Ok(mapped)
}
