use serde::{Deserialize, Serialize};

/// Kind of identity mutation being audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserEventKind {
    /// A user record was created
    Created,
    /// A user record was modified
    Modified,
    /// A user record was deleted
    Deleted,
    /// A user verified their account
    Verified,
    /// A user's email address changed
    EmailChanged,
}

impl UserEventKind {
    /// The audit action string (e.g. "user.created")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "user.created",
            Self::Modified => "user.modified",
            Self::Deleted => "user.deleted",
            Self::Verified => "user.verified",
            Self::EmailChanged => "user.email_changed",
        }
    }
}

impl std::fmt::Display for UserEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserEventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user.created" => Ok(Self::Created),
            "user.modified" => Ok(Self::Modified),
            "user.deleted" => Ok(Self::Deleted),
            "user.verified" => Ok(Self::Verified),
            "user.email_changed" => Ok(Self::EmailChanged),
            _ => Err(format!("Invalid user event kind: {}", s)),
        }
    }
}

/// An audit record for an identity mutation, ready for an audit sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// ID of the mutated user
    pub subject_id: String,
    /// The mutation that occurred
    pub event_kind: UserEventKind,
    /// Origin tag of the acting context (e.g. "client=admin")
    pub origin: String,
    /// JSON array of `key=value` detail strings
    pub data: String,
    /// Identity zone the mutation happened in
    pub zone_id: String,
}

impl AuditRecord {
    /// Parse the detail strings back out of `data`.
    pub fn details(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.data)
    }
}
