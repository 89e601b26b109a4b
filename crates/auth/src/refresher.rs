//! Access credential renewal from a refresh credential
//!
//! Only the access side rotates. The refresh credential is left as-is and
//! stays valid until its own expiry.

use crate::codec::CredentialCodec;
use crate::error::RefreshError;
use crate::issuer::{IssuedCredential, TokenIssuer};

#[derive(Debug, Clone)]
pub struct TokenRefresher {
    issuer: TokenIssuer,
}

impl TokenRefresher {
    pub fn new(issuer: TokenIssuer) -> Self {
        Self { issuer }
    }

    pub fn refresh(
        &self,
        refresh_credential: &str,
        now: i64,
    ) -> Result<IssuedCredential, RefreshError> {
        let claims = self
            .issuer
            .codec()
            .verify(refresh_credential, now)
            .inspect_err(|e| {
                tracing::debug!(
                    error = %e,
                    user_id = ?CredentialCodec::decode_unverified(refresh_credential).map(|c| c.sub),
                    "Refresh credential rejected"
                );
            })?;

        let refresh = claims.into_refresh().inspect_err(|e| {
            tracing::debug!(error = %e, "Non-refresh credential presented for refresh");
        })?;

        Ok(self
            .issuer
            .issue_access(refresh.subject_id(), refresh.subject_email(), now))
    }
}
