//! Authentication configuration

use std::sync::Arc;

/// Lifetime of an access credential.
pub const ACCESS_CREDENTIAL_TTL_SECS: i64 = 15 * 60;

/// Lifetime of a refresh credential. The only refresh lifetime in the system.
pub const REFRESH_CREDENTIAL_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Name of the single cookie carrying the refresh credential.
pub const REFRESH_COOKIE_NAME: &str = "pulsefit_refresh";

/// Returned when the configured signing secret is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("shared secret must not be empty")]
pub struct EmptySecretError;

/// Process-wide HMAC key. Immutable once built; cloning shares the bytes.
#[derive(Clone)]
pub struct SharedSecret(Arc<[u8]>);

impl SharedSecret {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, EmptySecretError> {
        let bytes = secret.as_ref();
        if bytes.is_empty() {
            return Err(EmptySecretError);
        }
        Ok(Self(Arc::from(bytes)))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret([redacted])")
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: SharedSecret,
    pub access_ttl_secs: i64,
    pub refresh_ttl_secs: i64,
    /// Adds the `Secure` attribute to the refresh cookie
    pub cookie_secure: bool,
}

impl AuthConfig {
    /// Config with the standard credential lifetimes and secure cookies
    pub fn new(secret: SharedSecret) -> Self {
        Self {
            secret,
            access_ttl_secs: ACCESS_CREDENTIAL_TTL_SECS,
            refresh_ttl_secs: REFRESH_CREDENTIAL_TTL_SECS,
            cookie_secure: true,
        }
    }

    pub fn with_cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = secure;
        self
    }
}
