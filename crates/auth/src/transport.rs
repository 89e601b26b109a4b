//! Credential transport helpers: bearer header and refresh cookie

use axum::http::HeaderValue;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::{AuthConfig, REFRESH_COOKIE_NAME};
use crate::error::AuthError;

/// Extract bearer credential from Authorization header
pub fn extract_bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::MalformedCredential)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::MalformedCredential),
    }
}

/// Refresh cookie carrying a freshly issued refresh credential
pub fn refresh_cookie(credential: String, config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, credential))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(cookie::time::Duration::seconds(config.refresh_ttl_secs))
        .build()
}

/// Expired refresh cookie that clears the browser's copy
pub fn clear_refresh_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE_NAME, ""))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(cookie::time::Duration::ZERO)
        .build()
}

/// Refresh credential from the request cookies, if present and non-empty
pub fn read_refresh_cookie(jar: &CookieJar) -> Option<String> {
    jar.get(REFRESH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
