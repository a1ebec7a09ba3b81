//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod amenities;
pub mod health;
pub mod login;
pub mod places;
pub mod reviews;
pub mod users;

pub use amenities::{
    create_amenity_handler, get_amenity_handler, list_amenities_handler, update_amenity_handler,
};
pub use health::health_handler;
pub use login::login_handler;
pub use places::{
    create_place_handler, delete_place_handler, get_place_handler, list_places_handler,
    update_place_handler,
};
pub use reviews::{
    create_review_handler, delete_review_handler, get_review_handler, list_reviews_handler,
    place_reviews_handler, update_review_handler,
};
pub use users::{create_user_handler, get_user_handler, list_users_handler, update_user_handler};
