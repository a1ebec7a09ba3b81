//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::facade::Facade;
use crate::application::services::AuthService;

/// Cloneable handle to the application services.
#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<Facade>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(facade: Arc<Facade>, auth_service: Arc<AuthService>) -> Self {
        Self {
            facade,
            auth_service,
        }
    }
}
