//! Stateless request authentication and role authorization for PulseFit
//!
//! Signs and verifies self-contained access/refresh credentials
//! (HMAC-SHA256 over a compact three-segment format), resolves the
//! credential subject to a principal, and gates requests by role through
//! axum extractors that work with any state implementing `FromRef<S>` for
//! `AuthBackend`.

mod backend;
mod claims;
mod clock;
mod codec;
mod config;
mod context;
mod error;
mod extractors;
mod gate;
mod issuer;
mod refresher;
mod resolver;
mod store;
mod transport;
mod types;

pub use backend::AuthBackend;
pub use claims::{AccessClaims, ClaimSet, CredentialType, RefreshClaims};
pub use clock::{check_expiry, Clock, ManualClock, SystemClock};
pub use codec::CredentialCodec;
pub use config::{
    AuthConfig, EmptySecretError, SharedSecret, ACCESS_CREDENTIAL_TTL_SECS, REFRESH_COOKIE_NAME,
    REFRESH_CREDENTIAL_TTL_SECS,
};
pub use context::AuthorizationContext;
pub use error::{
    AuthError, RefreshError, ResolutionError, StoreError, VerificationError, WrongCredentialType,
};
pub use extractors::{AdminUser, AuthUser, TrainerUser};
pub use gate::{authorize, Decision, DenyReason, RequiredRole};
pub use issuer::{IssuedCredential, IssuedPair, TokenIssuer};
pub use refresher::TokenRefresher;
pub use resolver::PrincipalResolver;
pub use store::{InMemoryPrincipalStore, PgPrincipalStore, PrincipalStore};
pub use transport::{clear_refresh_cookie, extract_bearer_token, read_refresh_cookie, refresh_cookie};
pub use types::{LoginRecord, Principal, PrincipalRecord, Role, UnknownRole};
