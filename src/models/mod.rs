//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que el servicio
//! sirve al cliente y guarda en cache.

pub mod weather;

pub use weather::WeatherRecord;
