//! Principal read-model types
//!
//! Lightweight views of the user rows owned by the account services.
//! These carry only what authentication and authorization need.

use serde::Serialize;

/// Platform role. Roles are disjoint: an admin is not implicitly a trainer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Trainer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Trainer => "trainer",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored role value outside the known set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized role '{0}'")]
pub struct UnknownRole(pub String);

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    /// Exact match only; no case folding or defaulting.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "client" => Ok(Role::Client),
            "trainer" => Ok(Role::Trainer),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Principal row as stored. `role` is kept raw until the resolver checks it.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PrincipalRecord {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

/// Row used by the login flow
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LoginRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// Principal with a validated role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl TryFrom<PrincipalRecord> for Principal {
    type Error = UnknownRole;

    fn try_from(record: PrincipalRecord) -> Result<Self, Self::Error> {
        let role = record.role.parse()?;
        Ok(Principal {
            id: record.id,
            email: record.email,
            name: record.name,
            role,
        })
    }
}
