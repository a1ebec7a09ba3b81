mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_login_success(pool: PgPool) {
    let (server, state) = common::make_server(pool.clone());
    let user = common::create_test_user(&pool, "john@example.com", false).await;

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "john@example.com", "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let token = json["access_token"].as_str().unwrap();
    let identity = state.auth_service.authenticate(token).unwrap();
    assert_eq!(identity.user_id, user.id);
    assert!(!identity.is_admin);
}

#[sqlx::test]
async fn test_login_on_auth_root(pool: PgPool) {
    let (server, _) = common::make_server(pool.clone());
    common::create_test_user(&pool, "admin@example.com", true).await;

    let response = server
        .post("/api/v1/auth")
        .json(&json!({ "email": "admin@example.com", "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["access_token"].is_string());
}

#[sqlx::test]
async fn test_login_email_is_case_insensitive(pool: PgPool) {
    let (server, _) = common::make_server(pool.clone());
    common::create_test_user(&pool, "mixed@example.com", false).await;

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "Mixed@Example.com", "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    let (server, _) = common::make_server(pool.clone());
    common::create_test_user(&pool, "john@example.com", false).await;

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "john@example.com", "password": "wrong" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[sqlx::test]
async fn test_login_unknown_email(pool: PgPool) {
    let (server, _) = common::make_server(pool);

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "ghost@example.com", "password": "whatever" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_login_missing_password(pool: PgPool) {
    let (server, _) = common::make_server(pool);

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "john@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Missing password");
}

#[sqlx::test]
async fn test_login_missing_email(pool: PgPool) {
    let (server, _) = common::make_server(pool);

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "password": common::TEST_PASSWORD }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["message"], "Missing email");
}

#[sqlx::test]
async fn test_login_malformed_body(pool: PgPool) {
    let (server, _) = common::make_server(pool);

    let response = server
        .post("/api/v1/auth/login")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_protected_route_requires_token(pool: PgPool) {
    let (server, _) = common::make_server(pool);

    let response = server
        .post("/api/v1/amenities")
        .json(&json!({ "name": "Wi-Fi" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.header("www-authenticate").to_str().unwrap(),
        "Bearer"
    );
}

#[sqlx::test]
async fn test_protected_route_rejects_bad_token(pool: PgPool) {
    let (server, _) = common::make_server(pool);

    let response = server
        .post("/api/v1/amenities")
        .authorization_bearer("not-a-jwt")
        .json(&json!({ "name": "Wi-Fi" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
