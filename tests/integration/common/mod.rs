//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests including:
//! - In-memory principal store seeded with one user per role
//! - A manual clock so expiry can be stepped deterministically
//! - Request helpers returning status, headers and JSON body

use std::sync::{Arc, OnceLock};

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, COOKIE, SET_COOKIE},
        HeaderMap, Request, StatusCode,
    },
    Router,
};
use http_body_util::BodyExt;
use pulsefit_auth::{
    AuthBackend, AuthConfig, InMemoryPrincipalStore, ManualClock, PrincipalRecord, SharedSecret,
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_only"; // pragma: allowlist secret
pub const TEST_PASSWORD: &str = "correct horse battery staple"; // pragma: allowlist secret
pub const START_TIME: i64 = 1000;

/// Argon2 is slow in debug builds; hash the shared password once.
fn password_hash() -> &'static str {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| pulsefit_common::hash_password(TEST_PASSWORD).unwrap())
}

/// Seeded principal
#[derive(Debug, Clone)]
pub struct UserFixture {
    pub id: i64,
    pub email: String,
    pub role: &'static str,
}

impl UserFixture {
    pub fn client() -> Self {
        Self::new(42, "client")
    }

    pub fn trainer() -> Self {
        Self::new(7, "trainer")
    }

    pub fn admin() -> Self {
        Self::new(1, "admin")
    }

    fn new(id: i64, role: &'static str) -> Self {
        Self {
            id,
            email: format!("{role}@pulsefit.test"),
            role,
        }
    }
}

/// Test application with in-memory dependencies
pub struct TestApp {
    pub backend: AuthBackend,
    pub clock: Arc<ManualClock>,
    pub store: Arc<InMemoryPrincipalStore>,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let store = Arc::new(InMemoryPrincipalStore::new());
        for fixture in [UserFixture::client(), UserFixture::trainer(), UserFixture::admin()] {
            store
                .insert(
                    PrincipalRecord {
                        id: fixture.id,
                        email: fixture.email.clone(),
                        name: Some(format!("Test {}", fixture.role)),
                        role: fixture.role.to_string(),
                    },
                    password_hash(),
                )
                .await;
        }

        let clock = Arc::new(ManualClock::new(START_TIME));
        let config =
            AuthConfig::new(SharedSecret::new(TEST_SECRET).unwrap()).with_cookie_secure(false);
        let backend = AuthBackend::with_clock(config, store.clone(), clock.clone());
        let router = pulsefit_app::build_router(backend.clone());

        Self {
            backend,
            clock,
            store,
            router,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        send(self.router.clone(), request).await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.send(
            Request::post("/v1/auth/login")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "email": email, "password": password }).to_string(),
                ))
                .unwrap(),
        )
        .await
    }

    pub async fn login_as(&self, fixture: &UserFixture) -> Session {
        let response = self.login(&fixture.email, TEST_PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);

        Session {
            access_token: response.body["access_token"].as_str().unwrap().to_string(),
            refresh_cookie: response.refresh_cookie_pair().unwrap(),
        }
    }

    pub async fn refresh(&self, cookie: Option<&str>) -> TestResponse {
        let mut builder = Request::post("/v1/auth/refresh");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn whoami(&self, bearer: Option<&str>) -> TestResponse {
        let mut builder = Request::get("/v1/auth/whoami");
        if let Some(token) = bearer {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }
}

/// Run one request through a router and capture the response
pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Credentials obtained from a successful login
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    /// `pulsefit_refresh=<credential>`, ready for a `Cookie` header
    pub refresh_cookie: String,
}

impl Session {
    pub fn refresh_credential(&self) -> &str {
        self.refresh_cookie
            .split_once('=')
            .map(|(_, value)| value)
            .unwrap()
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get(SET_COOKIE)
            .map(|value| value.to_str().unwrap().to_string())
    }

    /// `name=value` portion of the refresh `Set-Cookie` header
    pub fn refresh_cookie_pair(&self) -> Option<String> {
        self.set_cookie()
            .map(|cookie| cookie.split(';').next().unwrap().trim().to_string())
    }

    pub fn error_code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or_default()
    }
}
