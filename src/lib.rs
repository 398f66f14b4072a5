//! Weather Service
//!
//! Proxy de clima con cache: expone un endpoint HTTP de consulta por
//! ciudad, respaldado por el patrón cache-aside sobre Redis y el
//! proveedor OpenWeather.

pub mod api;
pub mod cache;
pub mod config;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Armar el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(api::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "weather-service",
        "status": "healthy",
        "message": "Servicio funcionando correctamente",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
