//! Middleware module
//!
//! Este módulo contiene los middlewares de la aplicación.

pub mod cors;

pub use cors::cors_middleware;
