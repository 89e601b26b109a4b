//! Authentication errors
//!
//! Each layer returns its own error kind; `AuthError` is the request-level
//! aggregate and owns the HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::claims::CredentialType;
use crate::gate::DenyReason;

/// Codec failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// Not three segments, or the payload does not decode to a claim set
    #[error("malformed credential")]
    MalformedCredential,
    #[error("credential signature is invalid")]
    InvalidSignature,
    #[error("credential has expired")]
    Expired,
}

/// A credential of one type was presented where the other is required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} credential, found {found}")]
pub struct WrongCredentialType {
    pub expected: CredentialType,
    pub found: CredentialType,
}

/// Refresher failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error(transparent)]
    Verification(#[from] VerificationError),
    #[error(transparent)]
    WrongCredentialType(#[from] WrongCredentialType),
}

/// Persistence collaborator failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Principal resolver failures
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("principal {0} not found")]
    PrincipalNotFound(i64),
    #[error("principal {subject_id} has unrecognized role '{role}'")]
    InvalidRole { subject_id: i64, role: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Request-level authentication error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("malformed credential")]
    MalformedCredential,
    #[error("credential signature is invalid")]
    InvalidSignature,
    #[error("credential has expired")]
    Expired,
    #[error("wrong credential type")]
    WrongCredentialType,
    #[error("principal not found")]
    PrincipalNotFound,
    #[error("principal has an unrecognized role")]
    InvalidRole,
    #[error("insufficient role for this operation")]
    InsufficientRole,
    /// Login rejected; unknown email and wrong password are indistinguishable
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("authentication backend unavailable")]
    StoreUnavailable,
}

impl From<VerificationError> for AuthError {
    fn from(value: VerificationError) -> Self {
        match value {
            VerificationError::MalformedCredential => AuthError::MalformedCredential,
            VerificationError::InvalidSignature => AuthError::InvalidSignature,
            VerificationError::Expired => AuthError::Expired,
        }
    }
}

impl From<WrongCredentialType> for AuthError {
    fn from(_: WrongCredentialType) -> Self {
        AuthError::WrongCredentialType
    }
}

impl From<RefreshError> for AuthError {
    fn from(value: RefreshError) -> Self {
        match value {
            RefreshError::Verification(e) => e.into(),
            RefreshError::WrongCredentialType(e) => e.into(),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "Principal store failure");
        AuthError::StoreUnavailable
    }
}

impl From<ResolutionError> for AuthError {
    fn from(value: ResolutionError) -> Self {
        match value {
            ResolutionError::PrincipalNotFound(_) => AuthError::PrincipalNotFound,
            ResolutionError::InvalidRole { .. } => AuthError::InvalidRole,
            ResolutionError::Store(e) => e.into(),
        }
    }
}

impl From<DenyReason> for AuthError {
    fn from(value: DenyReason) -> Self {
        match value {
            DenyReason::Unauthenticated => AuthError::Unauthenticated,
            DenyReason::InsufficientRole => AuthError::InsufficientRole,
        }
    }
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthenticated
            | AuthError::MalformedCredential
            | AuthError::InvalidSignature
            | AuthError::Expired
            | AuthError::WrongCredentialType
            | AuthError::PrincipalNotFound
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientRole => StatusCode::FORBIDDEN,
            AuthError::InvalidRole | AuthError::StoreUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::Unauthenticated => "UNAUTHENTICATED",
            AuthError::MalformedCredential => "MALFORMED_CREDENTIAL",
            AuthError::InvalidSignature => "INVALID_SIGNATURE",
            AuthError::Expired => "CREDENTIAL_EXPIRED",
            AuthError::WrongCredentialType => "WRONG_CREDENTIAL_TYPE",
            AuthError::PrincipalNotFound => "PRINCIPAL_NOT_FOUND",
            AuthError::InvalidRole => "INVALID_ROLE",
            AuthError::InsufficientRole => "INSUFFICIENT_ROLE",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::StoreUnavailable => "AUTH_STORE_ERROR",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (self.status_code(), body).into_response()
    }
}
