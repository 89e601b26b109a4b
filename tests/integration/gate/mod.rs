//! Authorization gate integration tests
//!
//! Mounts role-restricted routes next to the application router and checks
//! who gets through, using credentials obtained from the real login flow.

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, StatusCode},
    routing::get,
    Json, Router,
};
use pulsefit_auth::{AdminUser, AuthBackend, AuthUser, TrainerUser};
use serde_json::{json, Value};

use crate::common::{send, TestApp, TestResponse, UserFixture};

async fn list_clients(TrainerUser(ctx): TrainerUser) -> Json<Value> {
    Json(json!({ "trainer_id": ctx.subject_id() }))
}

async fn manage_accounts(AdminUser(ctx): AdminUser) -> Json<Value> {
    Json(json!({ "admin_id": ctx.subject_id() }))
}

async fn my_workouts(AuthUser(ctx): AuthUser) -> Json<Value> {
    Json(json!({ "owner_id": ctx.subject_id(), "role": ctx.role() }))
}

fn gated_routes(backend: AuthBackend) -> Router {
    Router::new()
        .route("/v1/trainer/clients", get(list_clients))
        .route("/v1/admin/accounts", get(manage_accounts))
        .route("/v1/workouts", get(my_workouts))
        .with_state(backend)
}

async fn call(app: &TestApp, path: &str, authorization: Option<&str>) -> TestResponse {
    let router = app.router.clone().merge(gated_routes(app.backend.clone()));

    let mut builder = Request::get(path);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    send(router, builder.body(Body::empty()).unwrap()).await
}

async fn bearer_for(app: &TestApp, fixture: &UserFixture) -> String {
    format!("Bearer {}", app.login_as(fixture).await.access_token)
}

#[tokio::test]
async fn test_trainer_route_admits_trainer_only() {
    let app = TestApp::new().await;

    let trainer = bearer_for(&app, &UserFixture::trainer()).await;
    let response = call(&app, "/v1/trainer/clients", Some(&trainer)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["trainer_id"], UserFixture::trainer().id);

    for fixture in [UserFixture::client(), UserFixture::admin()] {
        let bearer = bearer_for(&app, &fixture).await;
        let response = call(&app, "/v1/trainer/clients", Some(&bearer)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{}", fixture.role);
        assert_eq!(response.error_code(), "INSUFFICIENT_ROLE");
    }
}

#[tokio::test]
async fn test_admin_route_admits_admin_only() {
    let app = TestApp::new().await;

    let admin = bearer_for(&app, &UserFixture::admin()).await;
    assert_eq!(
        call(&app, "/v1/admin/accounts", Some(&admin)).await.status,
        StatusCode::OK
    );

    for fixture in [UserFixture::client(), UserFixture::trainer()] {
        let bearer = bearer_for(&app, &fixture).await;
        let response = call(&app, "/v1/admin/accounts", Some(&bearer)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{}", fixture.role);
    }
}

#[tokio::test]
async fn test_authenticated_route_admits_every_role() {
    let app = TestApp::new().await;

    for fixture in [UserFixture::client(), UserFixture::trainer(), UserFixture::admin()] {
        let bearer = bearer_for(&app, &fixture).await;
        let response = call(&app, "/v1/workouts", Some(&bearer)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["owner_id"], fixture.id);
        assert_eq!(response.body["role"], fixture.role);
    }
}

#[tokio::test]
async fn test_missing_credential_is_unauthenticated_everywhere() {
    let app = TestApp::new().await;

    for path in ["/v1/trainer/clients", "/v1/admin/accounts", "/v1/workouts"] {
        let response = call(&app, path, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(response.error_code(), "UNAUTHENTICATED");
    }
}

#[tokio::test]
async fn test_non_bearer_scheme_is_malformed() {
    let app = TestApp::new().await;
    let session = app.login_as(&UserFixture::trainer()).await;

    let response = call(
        &app,
        "/v1/trainer/clients",
        Some(&format!("Token {}", session.access_token)),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "MALFORMED_CREDENTIAL");
}

#[tokio::test]
async fn test_expired_admin_credential_is_not_forbidden_but_unauthorized() {
    let app = TestApp::new().await;
    let admin = bearer_for(&app, &UserFixture::admin()).await;

    app.clock.advance(3600);
    let response = call(&app, "/v1/trainer/clients", Some(&admin)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "CREDENTIAL_EXPIRED");
}
