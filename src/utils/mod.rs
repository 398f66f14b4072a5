//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y otras
//! funcionalidades comunes.

pub mod errors;

pub use errors::{AppError, AppResult};
