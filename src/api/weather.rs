//! Weather API
//!
//! Este módulo expone el endpoint de consulta de clima. El handler arma
//! el servicio cache-aside a partir del estado compartido y traduce los
//! errores mediante `AppError`.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::models::weather::WeatherRecord;
use crate::services::openweather_service::OpenWeatherService;
use crate::services::weather_cache_service::WeatherCacheService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

#[derive(Debug, Deserialize)]
pub struct WeatherQueryParams {
    pub city: String,
}

pub fn create_weather_router() -> Router<AppState> {
    Router::new().route("/weather", get(get_weather))
}

/// Endpoint para consultar el clima actual de una ciudad
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQueryParams>,
) -> AppResult<Json<WeatherRecord>> {
    log::info!("🌦️ Weather request received: {}", params.city);

    let provider = OpenWeatherService::from_config(state.http_client.clone(), &state.config);
    let service = WeatherCacheService::new(
        state.cache.clone(),
        provider,
        state.cache_config.default_ttl,
    );

    let record = service.get_weather(&params.city).await?;

    Ok(Json(record))
}
