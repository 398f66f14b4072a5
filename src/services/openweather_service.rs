//! OpenWeather Service
//!
//! Este módulo encapsula el acceso al proveedor de clima upstream
//! (API current-weather de OpenWeather) y la normalización de su
//! respuesta al modelo interno.

use serde::Deserialize;

use crate::config::environment::EnvironmentConfig;
use crate::models::weather::WeatherRecord;
use crate::utils::errors::{AppError, AppResult};

/// Respuesta del proveedor (solo los campos que se usan)
#[derive(Debug, Deserialize)]
struct OpenWeatherResponse {
    name: String,
    main: OpenWeatherMain,
    weather: Vec<OpenWeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OpenWeatherCondition {
    description: String,
    icon: String,
}

/// Cliente del proveedor de clima
#[derive(Clone)]
pub struct OpenWeatherService {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherService {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Crear el servicio desde la configuración de entorno
    pub fn from_config(client: reqwest::Client, config: &EnvironmentConfig) -> Self {
        Self::new(
            client,
            config.openweather_base_url.clone(),
            config.openweather_api_key.clone(),
        )
    }

    /// Consultar el clima actual de una ciudad en el proveedor.
    ///
    /// Cualquier status de fallo del proveedor (ciudad inexistente, API key
    /// inválida, error del servidor) colapsa en `WeatherUnavailable`; el
    /// status original no se propaga al caller.
    pub async fn get_current_weather(&self, city: &str) -> AppResult<WeatherRecord> {
        log::info!("🌐 Consultando clima upstream para: {}", city);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!(
                "⚠️ Upstream respondió {} para {}: {}",
                status,
                city,
                error_text
            );
            return Err(AppError::WeatherUnavailable);
        }

        let response_text = response.text().await?;

        let payload: OpenWeatherResponse = serde_json::from_str(&response_text)
            .map_err(|e| AppError::MalformedUpstream(format!("Failed to parse response: {}", e)))?;

        let condition = payload
            .weather
            .first()
            .ok_or_else(|| AppError::MalformedUpstream("Empty weather conditions list".to_string()))?;

        Ok(WeatherRecord {
            city: payload.name.clone(),
            temperature: payload.main.temp,
            description: condition.description.clone(),
            icon: condition.icon.clone(),
        })
    }
}
