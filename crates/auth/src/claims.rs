//! Credential claim types
//!
//! `ClaimSet` is the wire payload. Callers narrow it into `AccessClaims` or
//! `RefreshClaims` before use, so an access credential can never flow into
//! code expecting a refresh credential (or the reverse).

use serde::{Deserialize, Serialize};

use crate::error::WrongCredentialType;

/// Which grant a credential represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialType {
    Access,
    Refresh,
}

impl CredentialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialType::Access => "access",
            CredentialType::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for CredentialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded credential payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Subject (principal ID)
    pub sub: i64,
    /// Subject email, diagnostics only
    pub email: String,
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    /// Issued at (Unix seconds)
    pub iat: i64,
    /// Expires at (Unix seconds)
    pub exp: i64,
}

impl ClaimSet {
    /// Build a claim set valid for `ttl_secs` starting at `now`.
    pub fn new(
        sub: i64,
        email: impl Into<String>,
        credential_type: CredentialType,
        now: i64,
        ttl_secs: i64,
    ) -> Self {
        debug_assert!(ttl_secs > 0, "credential lifetime must be positive");
        Self {
            sub,
            email: email.into(),
            credential_type,
            iat: now,
            exp: now + ttl_secs,
        }
    }

    pub fn into_access(self) -> Result<AccessClaims, WrongCredentialType> {
        match self.credential_type {
            CredentialType::Access => Ok(AccessClaims(self)),
            found => Err(WrongCredentialType {
                expected: CredentialType::Access,
                found,
            }),
        }
    }

    pub fn into_refresh(self) -> Result<RefreshClaims, WrongCredentialType> {
        match self.credential_type {
            CredentialType::Refresh => Ok(RefreshClaims(self)),
            found => Err(WrongCredentialType {
                expected: CredentialType::Refresh,
                found,
            }),
        }
    }
}

/// Claims of a verified access credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessClaims(ClaimSet);

/// Claims of a verified refresh credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshClaims(ClaimSet);

macro_rules! typed_claims_accessors {
    ($ty:ty) => {
        impl $ty {
            pub fn subject_id(&self) -> i64 {
                self.0.sub
            }

            pub fn subject_email(&self) -> &str {
                &self.0.email
            }

            pub fn issued_at(&self) -> i64 {
                self.0.iat
            }

            pub fn expires_at(&self) -> i64 {
                self.0.exp
            }

            pub fn claims(&self) -> &ClaimSet {
                &self.0
            }

            pub fn into_inner(self) -> ClaimSet {
                self.0
            }
        }
    };
}

typed_claims_accessors!(AccessClaims);
typed_claims_accessors!(RefreshClaims);
