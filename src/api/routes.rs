//! API route configuration.
//!
//! Read endpoints are public. Every endpoint that changes state requires
//! Bearer token authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_amenity_handler, create_place_handler, create_review_handler, create_user_handler,
    delete_place_handler, delete_review_handler, get_amenity_handler, get_place_handler,
    get_review_handler, get_user_handler, list_amenities_handler, list_places_handler,
    list_reviews_handler, list_users_handler, login_handler, place_reviews_handler,
    update_amenity_handler, update_place_handler, update_review_handler, update_user_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

/// Routes reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth`, `POST /auth/login`             - Exchange credentials for a JWT
/// - `GET  /users`, `GET /users/{id}`             - User profiles
/// - `GET  /amenities`, `GET /amenities/{id}`     - Amenities
/// - `GET  /places`, `GET /places/{id}`           - Place summaries and details
/// - `GET  /reviews`, `GET /reviews/{id}`         - Reviews
/// - `GET  /reviews/places/{place_id}/reviews`    - Reviews of one place
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth", post(login_handler))
        .route("/auth/login", post(login_handler))
        .route("/users", get(list_users_handler))
        .route("/users/{id}", get(get_user_handler))
        .route("/amenities", get(list_amenities_handler))
        .route("/amenities/{id}", get(get_amenity_handler))
        .route("/places", get(list_places_handler))
        .route("/places/{id}", get(get_place_handler))
        .route("/reviews", get(list_reviews_handler))
        .route("/reviews/{id}", get(get_review_handler))
        .route(
            "/reviews/places/{place_id}/reviews",
            get(place_reviews_handler),
        )
}

/// Routes that require a valid access token.
///
/// # Endpoints
///
/// - `POST   /users`            - Register a user (admin)
/// - `PUT    /users/{id}`       - Update a profile (self or admin)
/// - `POST   /amenities`        - Create an amenity (admin)
/// - `PUT    /amenities/{id}`   - Rename an amenity (admin)
/// - `POST   /places`           - Create a place owned by the caller
/// - `PUT    /places/{id}`      - Update a place (owner or admin)
/// - `DELETE /places/{id}`      - Delete a place (owner or admin)
/// - `POST   /reviews`          - Review a place
/// - `PUT    /reviews/{id}`     - Update a review (author or admin)
/// - `DELETE /reviews/{id}`     - Delete a review (author or admin)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user_handler))
        .route("/users/{id}", put(update_user_handler))
        .route("/amenities", post(create_amenity_handler))
        .route("/amenities/{id}", put(update_amenity_handler))
        .route("/places", post(create_place_handler))
        .route(
            "/places/{id}",
            put(update_place_handler).delete(delete_place_handler),
        )
        .route("/reviews", post(create_review_handler))
        .route(
            "/reviews/{id}",
            put(update_review_handler).delete(delete_review_handler),
        )
}

/// Complete `/api/v1` router: public routes merged with authenticated ones.
///
/// The auth layer is applied with `route_layer`, so it only runs for
/// matched protected routes and GET requests on shared paths stay public.
pub fn router(state: AppState) -> Router<AppState> {
    let protected = protected_routes()
        .route_layer(middleware::from_fn_with_state(state, auth::layer));

    Router::new().merge(public_routes()).merge(protected)
}
