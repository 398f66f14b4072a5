//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de error del servicio
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales del servicio
#[derive(Error, Debug)]
pub enum AppError {
    /// El proveedor upstream respondió con un status de fallo.
    /// El status y el body originales se descartan: el cliente recibe
    /// siempre el mismo mensaje con clasificación 400.
    #[error("weather data not available")]
    WeatherUnavailable,

    /// El proveedor respondió OK pero el body no tiene la forma esperada.
    #[error("malformed upstream response: {0}")]
    MalformedUpstream(String),

    /// Fallo de red antes de obtener un status del proveedor.
    #[error("upstream request failed: {0}")]
    UpstreamRequest(#[from] reqwest::Error),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::WeatherUnavailable => (StatusCode::BAD_REQUEST, self.to_string()),

            AppError::MalformedUpstream(msg) => {
                tracing::error!("❌ Respuesta upstream malformada: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }

            AppError::UpstreamRequest(e) => {
                tracing::error!("❌ Error de red hacia el proveedor upstream: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream request failed".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
