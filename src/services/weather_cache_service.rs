//! Weather Cache Service
//!
//! Este módulo implementa el patrón cache-aside para las consultas de
//! clima: lectura del cache primero y, en MISS, fetch al proveedor con
//! escritura del resultado serializado bajo TTL.

use std::sync::Arc;

use crate::cache::CacheOperations;
use crate::models::weather::WeatherRecord;
use crate::services::openweather_service::OpenWeatherService;
use crate::utils::errors::AppResult;

/// Servicio de consultas de clima con cache-aside
pub struct WeatherCacheService {
    cache: Arc<dyn CacheOperations>,
    provider: OpenWeatherService,
    ttl_seconds: u64,
}

impl WeatherCacheService {
    pub fn new(
        cache: Arc<dyn CacheOperations>,
        provider: OpenWeatherService,
        ttl_seconds: u64,
    ) -> Self {
        Self {
            cache,
            provider,
            ttl_seconds,
        }
    }

    /// Clave de cache determinística por ciudad (case-sensitive)
    pub fn cache_key(city: &str) -> String {
        format!("weather:{}", city)
    }

    /// Obtener el clima de una ciudad, consultando el cache primero.
    ///
    /// Un fallo de lectura del cache o una entrada no deserializable se
    /// tratan como MISS. Misses concurrentes para la misma ciudad disparan
    /// fetchs duplicados al proveedor; no hay single-flight.
    pub async fn get_weather(&self, city: &str) -> AppResult<WeatherRecord> {
        let key = Self::cache_key(city);

        match self.cache.get(&key).await {
            Ok(Some(cached)) => match serde_json::from_str::<WeatherRecord>(&cached) {
                Ok(record) => {
                    log::info!("✅ Clima servido desde cache para: {}", city);
                    return Ok(record);
                }
                Err(e) => {
                    log::warn!("⚠️ Entrada de cache corrupta para {}: {}", key, e);
                }
            },
            Ok(None) => {}
            Err(e) => {
                log::warn!("⚠️ Error de cache en lectura para {}: {}", key, e);
            }
        }

        let record = self.provider.get_current_weather(city).await?;

        // Un fallo de escritura no tumba el request: el registro ya está en mano
        let serialized = match serde_json::to_string(&record) {
            Ok(serialized) => serialized,
            Err(e) => {
                log::warn!("⚠️ No se pudo serializar el registro para {}: {}", key, e);
                return Ok(record);
            }
        };

        if let Err(e) = self.cache.set(&key, &serialized, self.ttl_seconds).await {
            log::warn!("⚠️ No se pudo guardar en cache {}: {}", key, e);
        }

        Ok(record)
    }
}
