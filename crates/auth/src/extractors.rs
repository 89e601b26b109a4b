//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! Each extractor runs the full gate for one `RequiredRole`.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::context::AuthorizationContext;
use crate::error::AuthError;
use crate::gate::RequiredRole;
use crate::transport::extract_bearer_token;

async fn gate_request<S>(
    parts: &Parts,
    state: &S,
    required: RequiredRole,
) -> Result<AuthorizationContext, AuthError>
where
    AuthBackend: FromRef<S>,
{
    let backend = AuthBackend::from_ref(state);

    let credential = parts
        .headers
        .get(AUTHORIZATION)
        .map(extract_bearer_token)
        .transpose()?;

    backend.authorize_request(credential, required).await
}

/// Any authenticated principal
#[derive(Debug)]
pub struct AuthUser(pub AuthorizationContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        gate_request(parts, state, RequiredRole::Authenticated)
            .await
            .map(AuthUser)
    }
}

/// Trainer-only extractor. Admins are rejected with 403.
#[derive(Debug)]
pub struct TrainerUser(pub AuthorizationContext);

impl<S> FromRequestParts<S> for TrainerUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        gate_request(parts, state, RequiredRole::Trainer)
            .await
            .map(TrainerUser)
    }
}

/// Admin-only extractor
#[derive(Debug)]
pub struct AdminUser(pub AuthorizationContext);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        gate_request(parts, state, RequiredRole::Admin)
            .await
            .map(AdminUser)
    }
}
