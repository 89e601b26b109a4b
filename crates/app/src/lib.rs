//! PulseFit application composition root
//!
//! Composes all domain routers into a single application.

use std::sync::Arc;

use axum::Router;
use pulsefit_accounts::AccountsState;
use pulsefit_auth::{AuthBackend, AuthConfig, PgPrincipalStore, PrincipalStore, SharedSecret};
use pulsefit_common::Config;
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let store: Arc<dyn PrincipalStore> = Arc::new(PgPrincipalStore::new(pool));
    Ok(build_router(auth_backend(&config, store)?))
}

/// Build the auth backend from configuration.
///
/// Fails when the signing secret is empty; the server must not start
/// without one.
pub fn auth_backend(
    config: &Config,
    store: Arc<dyn PrincipalStore>,
) -> Result<AuthBackend, anyhow::Error> {
    let secret = SharedSecret::new(&config.auth_secret)?;
    let auth_config = AuthConfig::new(secret).with_cookie_secure(config.cookie_secure);

    Ok(AuthBackend::new(auth_config, store))
}

/// Compose domain routers with shared infrastructure routes
pub fn build_router(auth: AuthBackend) -> Router {
    let accounts_state = AccountsState { auth };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "PulseFit API v0.0.1-SNAPSHOT" }),
        )
        .merge(pulsefit_accounts::routes().with_state(accounts_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
