use serde::{Deserialize, Serialize};

use crate::models::UserEventKind;

/// Snapshot of the user record affected by a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutatedUser {
    pub id: String,
    pub username: String,
    /// Origin of the user account (e.g. `uaa`, `ldap`).
    pub origin: String,
    /// Primary email address.
    pub email: String,
}

impl MutatedUser {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        origin: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            origin: origin.into(),
            email: email.into(),
        }
    }
}

/// An identity mutation, created when the corresponding persistence
/// operation happens and consumed once by the auditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationEvent {
    kind: UserEventKind,
    user: MutatedUser,
    zone_id: String,
}

impl MutationEvent {
    fn new(kind: UserEventKind, user: MutatedUser, zone_id: impl Into<String>) -> Self {
        Self {
            kind,
            user,
            zone_id: zone_id.into(),
        }
    }

    pub fn user_created(user: MutatedUser, zone_id: impl Into<String>) -> Self {
        Self::new(UserEventKind::Created, user, zone_id)
    }

    pub fn user_modified(user: MutatedUser, zone_id: impl Into<String>) -> Self {
        Self::new(UserEventKind::Modified, user, zone_id)
    }

    pub fn user_deleted(user: MutatedUser, zone_id: impl Into<String>) -> Self {
        Self::new(UserEventKind::Deleted, user, zone_id)
    }

    pub fn user_verified(user: MutatedUser, zone_id: impl Into<String>) -> Self {
        Self::new(UserEventKind::Verified, user, zone_id)
    }

    pub fn email_changed(user: MutatedUser, zone_id: impl Into<String>) -> Self {
        Self::new(UserEventKind::EmailChanged, user, zone_id)
    }

    pub fn kind(&self) -> UserEventKind {
        self.kind
    }

    pub fn user(&self) -> &MutatedUser {
        &self.user
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        let user = MutatedUser::new("u1", "ada", "uaa", "ada@example.com");
        let cases = [
            (MutationEvent::user_created(user.clone(), "z1"), UserEventKind::Created),
            (MutationEvent::user_modified(user.clone(), "z1"), UserEventKind::Modified),
            (MutationEvent::user_deleted(user.clone(), "z1"), UserEventKind::Deleted),
            (MutationEvent::user_verified(user.clone(), "z1"), UserEventKind::Verified),
            (MutationEvent::email_changed(user, "z1"), UserEventKind::EmailChanged),
        ];
        for (event, kind) in cases {
            assert_eq!(event.kind(), kind);
        }
    }

    #[test]
    fn test_accessors() {
        let event = MutationEvent::email_changed(
            MutatedUser::new("u1", "ada", "uaa", "ada@example.com"),
            "z1",
        );
        assert_eq!(event.user_id(), "u1");
        assert_eq!(event.username(), "ada");
        assert_eq!(event.email(), "ada@example.com");
        assert_eq!(event.zone_id(), "z1");
    }
}
