use std::collections::HashMap;

use crate::models::UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum ProfileLookupError {
    #[error("User {id} not found in zone {zone_id}")]
    NotFound { id: String, zone_id: String },

    #[error("Profile lookup failed: {0}")]
    Internal(String),
}

/// Resolves a principal to its stored profile.
pub trait ProfileLookup: Send + Sync {
    fn lookup(&self, principal_id: &str, zone_id: &str) -> Result<UserProfile, ProfileLookupError>;
}

impl<T: ProfileLookup + ?Sized> ProfileLookup for &T {
    fn lookup(&self, principal_id: &str, zone_id: &str) -> Result<UserProfile, ProfileLookupError> {
        (**self).lookup(principal_id, zone_id)
    }
}

/// Profile lookup backed by a fixed set of profiles, keyed by (id, zone).
#[derive(Debug, Default, Clone)]
pub struct InMemoryProfileLookup {
    profiles: HashMap<(String, String), UserProfile>,
}

impl InMemoryProfileLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, zone_id: impl Into<String>, profile: UserProfile) {
        self.profiles
            .insert((profile.id.clone(), zone_id.into()), profile);
    }

    pub fn with_profile(mut self, zone_id: impl Into<String>, profile: UserProfile) -> Self {
        self.insert(zone_id, profile);
        self
    }
}

impl ProfileLookup for InMemoryProfileLookup {
    fn lookup(&self, principal_id: &str, zone_id: &str) -> Result<UserProfile, ProfileLookupError> {
        self.profiles
            .get(&(principal_id.to_string(), zone_id.to_string()))
            .cloned()
            .ok_or_else(|| ProfileLookupError::NotFound {
                id: principal_id.to_string(),
                zone_id: zone_id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_zone_scoped() {
        let lookup = InMemoryProfileLookup::new().with_profile("z1", UserProfile::new("u1", "ada"));

        assert_eq!(lookup.lookup("u1", "z1").unwrap().user_name, "ada");
        let err = lookup.lookup("u1", "z2").unwrap_err();
        assert!(matches!(err, ProfileLookupError::NotFound { ref zone_id, .. } if zone_id == "z2"));
    }
}
