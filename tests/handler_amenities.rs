mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

#[sqlx::test]
async fn test_create_amenity_as_admin(pool: PgPool) {
    let (server, state) = common::make_server(pool.clone());
    let admin = common::create_test_user(&pool, "admin@example.com", true).await;

    let response = server
        .post("/api/v1/amenities")
        .authorization_bearer(common::token_for(&state, &admin))
        .json(&json!({ "name": "Wi-Fi" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["name"], "Wi-Fi");
    assert!(json.get("id").is_some());
}

#[sqlx::test]
async fn test_create_amenity_as_user_forbidden(pool: PgPool) {
    let (server, state) = common::make_server(pool.clone());
    let user = common::create_test_user(&pool, "user@example.com", false).await;

    let response = server
        .post("/api/v1/amenities")
        .authorization_bearer(common::token_for(&state, &user))
        .json(&json!({ "name": "Wi-Fi" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["message"],
        "Admin privileges required"
    );
}

#[sqlx::test]
async fn test_create_amenity_name_too_long(pool: PgPool) {
    let (server, state) = common::make_server(pool.clone());
    let admin = common::create_test_user(&pool, "admin@example.com", true).await;

    let response = server
        .post("/api/v1/amenities")
        .authorization_bearer(common::token_for(&state, &admin))
        .json(&json!({ "name": "x".repeat(51) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_list_and_get_amenities(pool: PgPool) {
    let (server, _) = common::make_server(pool.clone());
    let wifi = common::create_test_amenity(&pool, "Wi-Fi").await;
    common::create_test_amenity(&pool, "Air Conditioning").await;

    let list = server.get("/api/v1/amenities").await;
    list.assert_status_ok();

    let json = list.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Air Conditioning");

    let one = server.get(&format!("/api/v1/amenities/{wifi}")).await;
    one.assert_status_ok();
    assert_eq!(one.json::<serde_json::Value>()["name"], "Wi-Fi");
}

#[sqlx::test]
async fn test_get_amenity_not_found(pool: PgPool) {
    let (server, _) = common::make_server(pool);

    let response = server
        .get(&format!("/api/v1/amenities/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_update_amenity_as_admin(pool: PgPool) {
    let (server, state) = common::make_server(pool.clone());
    let admin = common::create_test_user(&pool, "admin@example.com", true).await;
    let wifi = common::create_test_amenity(&pool, "Wifi").await;

    let response = server
        .put(&format!("/api/v1/amenities/{wifi}"))
        .authorization_bearer(common::token_for(&state, &admin))
        .json(&json!({ "name": "Wi-Fi" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "Wi-Fi");
}

#[sqlx::test]
async fn test_update_amenity_not_found(pool: PgPool) {
    let (server, state) = common::make_server(pool.clone());
    let admin = common::create_test_user(&pool, "admin@example.com", true).await;

    let response = server
        .put(&format!("/api/v1/amenities/{}", Uuid::new_v4()))
        .authorization_bearer(common::token_for(&state, &admin))
        .json(&json!({ "name": "Pool" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
