//! API endpoints
//!
//! Este módulo contiene los endpoints de la API.

pub mod weather;

use axum::Router;
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new().merge(weather::create_weather_router())
}
