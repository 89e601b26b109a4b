//! Credential pair issuance

use serde::Serialize;

use crate::claims::{ClaimSet, CredentialType};
use crate::codec::CredentialCodec;
use crate::config::AuthConfig;

/// A signed credential together with the claims it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedCredential {
    pub credential: String,
    pub claims: ClaimSet,
}

impl IssuedCredential {
    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }
}

/// Result of a successful login: access goes in the body, refresh in the cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedPair {
    pub access: IssuedCredential,
    pub refresh: IssuedCredential,
}

#[derive(Debug, Clone)]
pub struct TokenIssuer {
    codec: CredentialCodec,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: CredentialCodec::new(config.secret.clone()),
            access_ttl_secs: config.access_ttl_secs,
            refresh_ttl_secs: config.refresh_ttl_secs,
        }
    }

    pub fn codec(&self) -> &CredentialCodec {
        &self.codec
    }

    /// Mint an access + refresh pair for a principal. No side effects.
    pub fn issue_pair(&self, subject_id: i64, subject_email: &str, now: i64) -> IssuedPair {
        IssuedPair {
            access: self.issue_access(subject_id, subject_email, now),
            refresh: self.issue(
                subject_id,
                subject_email,
                CredentialType::Refresh,
                now,
                self.refresh_ttl_secs,
            ),
        }
    }

    /// Mint a standalone access credential with a fresh window
    pub fn issue_access(&self, subject_id: i64, subject_email: &str, now: i64) -> IssuedCredential {
        self.issue(
            subject_id,
            subject_email,
            CredentialType::Access,
            now,
            self.access_ttl_secs,
        )
    }

    fn issue(
        &self,
        subject_id: i64,
        subject_email: &str,
        credential_type: CredentialType,
        now: i64,
        ttl_secs: i64,
    ) -> IssuedCredential {
        let claims = ClaimSet::new(subject_id, subject_email, credential_type, now, ttl_secs);
        IssuedCredential {
            credential: self.codec.encode(&claims),
            claims,
        }
    }
}
