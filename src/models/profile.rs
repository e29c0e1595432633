use serde::{Deserialize, Serialize};

/// A stored user profile, as resolved by a profile lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Server-assigned unique identifier
    pub id: String,

    /// Unique login name
    pub user_name: String,

    /// User's name components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ProfileName>,

    /// Email addresses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ProfileEmail>,

    /// Phone numbers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<PhoneNumber>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, given: impl Into<String>, family: impl Into<String>) -> Self {
        self.name = Some(ProfileName {
            given_name: Some(given.into()),
            family_name: Some(family.into()),
        });
        self
    }

    pub fn with_email(mut self, value: impl Into<String>, primary: bool) -> Self {
        self.emails.push(ProfileEmail {
            value: value.into(),
            primary,
        });
        self
    }

    pub fn with_phone_number(mut self, value: impl Into<String>, primary: bool) -> Self {
        self.phone_numbers.push(PhoneNumber {
            value: value.into(),
            phone_type: None,
            primary,
        });
        self
    }

    pub fn given_name(&self) -> Option<&str> {
        self.name.as_ref()?.given_name.as_deref()
    }

    pub fn family_name(&self) -> Option<&str> {
        self.name.as_ref()?.family_name.as_deref()
    }

    /// Get the primary email address, falling back to the first one
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|e| e.primary)
            .or_else(|| self.emails.first())
            .map(|e| e.value.as_str())
    }

    /// Get the phone number published for this user: the first entry,
    /// regardless of its `primary` flag.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_numbers.first().map(|p| p.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    /// Given name (first name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Family name (last name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEmail {
    pub value: String,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub value: String,
    /// Type of phone number (e.g. "work", "mobile")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_email_prefers_flagged_entry() {
        let profile = UserProfile::new("u1", "ada")
            .with_email("first@example.com", false)
            .with_email("primary@example.com", true);
        assert_eq!(profile.primary_email(), Some("primary@example.com"));
    }

    #[test]
    fn test_primary_email_falls_back_to_first() {
        let profile = UserProfile::new("u1", "ada")
            .with_email("first@example.com", false)
            .with_email("second@example.com", false);
        assert_eq!(profile.primary_email(), Some("first@example.com"));
    }

    #[test]
    fn test_phone_number_extraction() {
        let profile = UserProfile::new("u1", "ada");
        assert_eq!(profile.phone_number(), None);

        let profile = profile
            .with_phone_number("+1 555 0100", false)
            .with_phone_number("+1 555 0199", true);
        assert_eq!(profile.phone_number(), Some("+1 555 0100"));
    }

    #[test]
    fn test_name_accessors_without_name() {
        let profile = UserProfile::new("u1", "ada");
        assert_eq!(profile.given_name(), None);
        assert_eq!(profile.family_name(), None);
    }

    #[test]
    fn test_deserialize_scim_shape() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "id": "u1",
                "userName": "ada",
                "name": {"givenName": "Ada", "familyName": "Lovelace"},
                "emails": [{"value": "ada@example.com", "primary": true}],
                "phoneNumbers": [{"value": "+44 20 7946 0000", "type": "work"}]
            }"#,
        )
        .unwrap();
        assert_eq!(profile.given_name(), Some("Ada"));
        assert_eq!(profile.family_name(), Some("Lovelace"));
        assert_eq!(profile.primary_email(), Some("ada@example.com"));
        assert_eq!(profile.phone_number(), Some("+44 20 7946 0000"));
        assert_eq!(profile.phone_numbers[0].phone_type.as_deref(), Some("work"));
    }
}
