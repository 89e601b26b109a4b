//! Principal resolution for verified access credentials

use std::sync::Arc;

use crate::claims::AccessClaims;
use crate::context::AuthorizationContext;
use crate::error::ResolutionError;
use crate::store::PrincipalStore;
use crate::types::Principal;

#[derive(Clone)]
pub struct PrincipalResolver {
    store: Arc<dyn PrincipalStore>,
}

impl PrincipalResolver {
    pub fn new(store: Arc<dyn PrincipalStore>) -> Self {
        Self { store }
    }

    /// Load the subject's current record and derive its role flags.
    ///
    /// A principal deleted after issuance resolves to `PrincipalNotFound`;
    /// its credentials are not otherwise invalidated.
    pub async fn resolve(
        &self,
        claims: &AccessClaims,
    ) -> Result<AuthorizationContext, ResolutionError> {
        self.resolve_subject(claims.subject_id()).await
    }

    pub(crate) async fn resolve_subject(
        &self,
        subject_id: i64,
    ) -> Result<AuthorizationContext, ResolutionError> {
        let record = self
            .store
            .find_principal(subject_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(user_id = subject_id, "Credential subject no longer exists");
                ResolutionError::PrincipalNotFound(subject_id)
            })?;

        let principal = Principal::try_from(record).map_err(|e| {
            tracing::error!(user_id = subject_id, role = %e.0, "Principal has unrecognized role");
            ResolutionError::InvalidRole {
                subject_id,
                role: e.0,
            }
        })?;

        Ok(AuthorizationContext::new(principal))
    }
}
