//! Route definitions for Accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::session;
use super::state::AccountsState;

/// Create session routes
fn session_routes() -> Router<AccountsState> {
    Router::new()
        .route("/v1/auth/login", post(session::login))
        .route("/v1/auth/refresh", post(session::refresh))
        .route("/v1/auth/logout", post(session::logout))
}

/// Create auth introspection routes
fn introspection_routes() -> Router<AccountsState> {
    Router::new().route("/v1/auth/whoami", get(session::whoami))
}

/// Create all Accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .merge(session_routes())
        .merge(introspection_routes())
}
