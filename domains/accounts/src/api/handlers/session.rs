//! Session API handlers
//!
//! Implements:
//! - POST /v1/auth/login - Verify password, issue access + refresh credentials
//! - POST /v1/auth/refresh - Exchange the refresh cookie for a new access credential
//! - POST /v1/auth/logout - Clear the refresh cookie
//! - GET /v1/auth/whoami - Return authorization context for the current caller

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::CookieJar;
use pulsefit_auth::{
    clear_refresh_cookie, read_refresh_cookie, refresh_cookie, AuthError, AuthUser,
    AuthorizationContext, IssuedCredential, Principal, Role,
};
use pulsefit_common::{verify_login_password, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::error::SessionError;
use crate::api::state::AccountsState;

const TOKEN_TYPE: &str = "Bearer";

/// Request body for `POST /v1/auth/login`
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 1024))]
    pub password: String,
}

/// Public view of a principal
#[derive(Debug, Serialize)]
pub struct PrincipalResponse {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl From<&Principal> for PrincipalResponse {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id,
            email: principal.email.clone(),
            name: principal.name.clone(),
            role: principal.role,
        }
    }
}

/// Access credential as returned in response bodies
#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_at: i64,
    pub expires_in: i64,
}

impl AccessResponse {
    fn new(access: IssuedCredential, now: i64) -> Self {
        Self {
            expires_at: access.expires_at(),
            expires_in: access.expires_at() - now,
            access_token: access.credential,
            token_type: TOKEN_TYPE,
        }
    }
}

/// Response shape for `POST /v1/auth/login`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub access: AccessResponse,
    pub user: PrincipalResponse,
}

/// Response shape for `GET /v1/auth/whoami`
#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub user: PrincipalResponse,
    pub is_admin: bool,
    pub is_trainer: bool,
    pub is_client: bool,
}

impl From<&AuthorizationContext> for WhoamiResponse {
    fn from(context: &AuthorizationContext) -> Self {
        Self {
            user: PrincipalResponse::from(context.principal()),
            is_admin: context.is_admin(),
            is_trainer: context.is_trainer(),
            is_client: context.is_client(),
        }
    }
}

/// POST /v1/auth/login - Verify password, issue access + refresh credentials
pub async fn login(
    State(state): State<AccountsState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), SessionError> {
    let backend = &state.auth;

    let login = backend
        .store()
        .find_login_by_email(&request.email)
        .await
        .map_err(AuthError::from)?;

    // Unknown accounts still pay for a full hash check.
    let password = request.password;
    let stored_hash = login.as_ref().map(|login| login.password_hash.clone());
    let password_ok = tokio::task::spawn_blocking(move || {
        verify_login_password(&password, stored_hash.as_deref())
    })
    .await
    .map_err(|e| pulsefit_common::Error::Internal(format!("Password verification failed: {e}")))?;

    let login = match login {
        Some(login) if password_ok => login,
        Some(login) => {
            tracing::warn!(user_id = login.id, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }
        None => {
            tracing::warn!("Login rejected: unknown email");
            return Err(AuthError::InvalidCredentials.into());
        }
    };

    let context = backend.resolve_subject(login.id).await?;
    let pair = backend.issue_pair(login.id, &login.email);
    let now = pair.access.claims.iat;

    tracing::info!(user_id = login.id, role = %context.role(), "Login succeeded");

    let jar = jar.add(refresh_cookie(pair.refresh.credential, backend.config()));
    let response = LoginResponse {
        access: AccessResponse::new(pair.access, now),
        user: PrincipalResponse::from(context.principal()),
    };

    Ok((jar, Json(response)))
}

/// POST /v1/auth/refresh - Exchange the refresh cookie for a new access credential
///
/// The refresh cookie is left untouched.
pub async fn refresh(
    State(state): State<AccountsState>,
    jar: CookieJar,
) -> Result<Json<AccessResponse>, SessionError> {
    let credential = read_refresh_cookie(&jar).ok_or(AuthError::Unauthenticated)?;

    let access = state.auth.refresh_access(&credential).await?;
    let now = access.claims.iat;

    Ok(Json(AccessResponse::new(access, now)))
}

/// POST /v1/auth/logout - Clear the refresh cookie
///
/// Issued credentials stay valid until expiry; there is no revocation list.
pub async fn logout(State(state): State<AccountsState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = jar.add(clear_refresh_cookie(state.auth.config()));
    tracing::info!("Refresh cookie cleared");
    (jar, StatusCode::NO_CONTENT)
}

/// GET /v1/auth/whoami - Return authorization context for the current caller
pub async fn whoami(AuthUser(context): AuthUser) -> Json<WhoamiResponse> {
    Json(WhoamiResponse::from(&context))
}
