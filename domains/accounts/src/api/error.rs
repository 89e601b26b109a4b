//! Error type for session handlers

use axum::response::{IntoResponse, Response};
use pulsefit_auth::AuthError;

/// Session handler failure: either an auth decision or an internal fault
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Internal(#[from] pulsefit_common::Error),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        match self {
            SessionError::Auth(e) => e.into_response(),
            SessionError::Internal(e) => e.into_response(),
        }
    }
}
