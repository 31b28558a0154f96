//! Profiles: the identities a connected wallet can act as.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a profile within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Which dashboard a profile is entitled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Older data files call this role "user".
    #[serde(alias = "user")]
    Investor,
    Issuer,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Investor, Role::Issuer, Role::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Role::Investor => "Investor",
            Role::Issuer => "Issuer",
            Role::Admin => "Admin",
        }
    }
}

/// An identity with a role, shown in the header and profile menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub role: Role,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

impl Profile {
    pub fn new(id: impl Into<String>, role: Role, display_name: impl Into<String>) -> Self {
        Self {
            id: ProfileId::new(id),
            role,
            display_name: display_name.into(),
            avatar_ref: None,
        }
    }

    pub fn with_avatar(mut self, avatar_ref: impl Into<String>) -> Self {
        self.avatar_ref = Some(avatar_ref.into());
        self
    }

    /// Avatar fallback: first letter of each word of the display name.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
