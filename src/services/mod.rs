//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el
//! cliente del proveedor de clima y el servicio cache-aside que lo
//! envuelve.

pub mod openweather_service;
pub mod weather_cache_service;

pub use openweather_service::OpenWeatherService;
pub use weather_cache_service::WeatherCacheService;
