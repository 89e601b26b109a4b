//! Concrete authentication backend
//!
//! Bundles the codec, issuer, refresher and resolver around one shared
//! secret, one principal store and one clock. Cheap to clone.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::codec::CredentialCodec;
use crate::config::AuthConfig;
use crate::context::AuthorizationContext;
use crate::error::AuthError;
use crate::gate::{authorize, RequiredRole};
use crate::issuer::{IssuedCredential, IssuedPair, TokenIssuer};
use crate::refresher::TokenRefresher;
use crate::resolver::PrincipalResolver;
use crate::store::PrincipalStore;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    config: AuthConfig,
    issuer: TokenIssuer,
    refresher: TokenRefresher,
    resolver: PrincipalResolver,
    store: Arc<dyn PrincipalStore>,
    clock: Arc<dyn Clock>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig, store: Arc<dyn PrincipalStore>) -> Self {
        Self::with_clock(config, store, Arc::new(SystemClock))
    }

    pub fn with_clock(
        config: AuthConfig,
        store: Arc<dyn PrincipalStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let issuer = TokenIssuer::new(&config);
        Self {
            refresher: TokenRefresher::new(issuer.clone()),
            resolver: PrincipalResolver::new(store.clone()),
            issuer,
            config,
            store,
            clock,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn PrincipalStore {
        self.store.as_ref()
    }

    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Issue a fresh pair for a principal whose password was just verified
    pub fn issue_pair(&self, subject_id: i64, subject_email: &str) -> IssuedPair {
        let pair = self.issuer.issue_pair(subject_id, subject_email, self.now());
        tracing::info!(user_id = subject_id, "Issued credential pair");
        pair
    }

    /// Verify an access credential and resolve its subject.
    pub async fn authenticate_access(
        &self,
        credential: &str,
    ) -> Result<AuthorizationContext, AuthError> {
        let claims = self
            .issuer
            .codec()
            .verify(credential, self.now())
            .inspect_err(|e| {
                tracing::debug!(
                    error = %e,
                    user_id = ?CredentialCodec::decode_unverified(credential).map(|c| c.sub),
                    "Access credential rejected"
                );
            })?;

        let access = claims.into_access().inspect_err(|e| {
            tracing::debug!(error = %e, "Non-access credential presented as bearer");
        })?;

        Ok(self.resolver.resolve(&access).await?)
    }

    /// Current authorization context for a subject, bypassing credentials.
    ///
    /// Used by the login flow once the password has been checked.
    pub async fn resolve_subject(&self, subject_id: i64) -> Result<AuthorizationContext, AuthError> {
        Ok(self.resolver.resolve_subject(subject_id).await?)
    }

    /// Full request gate: optional bearer credential -> decision.
    pub async fn authorize_request(
        &self,
        credential: Option<&str>,
        required: RequiredRole,
    ) -> Result<AuthorizationContext, AuthError> {
        let context = match credential {
            Some(credential) => Some(self.authenticate_access(credential).await?),
            None => None,
        };

        authorize(context, required).into_result().map_err(|reason| {
            tracing::debug!(reason = %reason, required = ?required, "Request denied");
            AuthError::from(reason)
        })
    }

    /// Exchange a refresh credential for a new access credential.
    ///
    /// The subject must still exist; a deleted principal cannot keep
    /// minting access credentials from an old refresh credential.
    pub async fn refresh_access(
        &self,
        refresh_credential: &str,
    ) -> Result<IssuedCredential, AuthError> {
        let access = self.refresher.refresh(refresh_credential, self.now())?;
        let context = self.resolver.resolve_subject(access.claims.sub).await?;

        tracing::info!(
            user_id = access.claims.sub,
            role = %context.role(),
            "Access credential refreshed"
        );
        Ok(access)
    }
}
