//! Account and access-token models.
//!
//! These mirror the `user_data` and `personal_access_token` tables. The lookup
//! code only reads them; they exist here so stores and tests share one shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role, stored as a free-form string.
///
/// Only `admin` and `privileged` carry meaning; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Privileged,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Privileged => "privileged",
            Role::Other(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        match name {
            "admin" => Role::Admin,
            "privileged" => Role::Privileged,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        match name.as_str() {
            "admin" => Role::Admin,
            "privileged" => Role::Privileged,
            _ => Role::Other(name),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub login_name: String,
    /// `None` for accounts without a role.
    pub role: Option<Role>,
}

/// Personal access token owned by an [`Account`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub id: i64,
    /// Owning account id.
    pub user_data: i64,
    pub value: String,
    pub active: bool,
    pub description: Option<String>,
}
