#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use hbnb::api;
use hbnb::api::handlers::health_handler;
use hbnb::domain::entities::{NewPlace, NewUser, Place, User};
use hbnb::domain::repositories::{PlaceRepository, UserRepository};
use hbnb::infrastructure::persistence::{PgPlaceRepository, PgUserRepository};
use hbnb::server::build_state;
use hbnb::state::AppState;
use hbnb::utils::password::hash_password;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-0123456789";
pub const TEST_PASSWORD: &str = "password123";

pub fn create_test_state(pool: PgPool) -> AppState {
    build_state(pool, TEST_JWT_SECRET, 900)
}

/// Test server with `/health` and the `/api/v1` routes, without rate limiting.
pub fn make_server(pool: PgPool) -> (TestServer, AppState) {
    let state = create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api::routes::router(state.clone()))
        .with_state(state.clone());
    (TestServer::new(app).unwrap(), state)
}

pub async fn create_test_user(pool: &PgPool, email: &str, is_admin: bool) -> User {
    PgUserRepository::new(Arc::new(pool.clone()))
        .create(NewUser {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).unwrap(),
            is_admin,
        })
        .await
        .unwrap()
}

pub async fn create_test_place(pool: &PgPool, owner_id: Uuid, title: &str) -> Place {
    PgPlaceRepository::new(Arc::new(pool.clone()))
        .create(NewPlace {
            title: title.to_string(),
            description: Some("A nice place to stay".to_string()),
            price: 100.0,
            latitude: 37.7749,
            longitude: -122.4194,
            owner_id,
            amenity_ids: Vec::new(),
        })
        .await
        .unwrap()
}

pub async fn create_test_amenity(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO amenities (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn token_for(state: &AppState, user: &User) -> String {
    state.auth_service.issue_token(user).unwrap()
}
