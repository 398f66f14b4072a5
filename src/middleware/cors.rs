//! Middleware de CORS
//!
//! Este módulo configura CORS para aceptar requests desde
//! cualquier origen.

use tower_http::cors::CorsLayer;

/// Crear middleware de CORS
/// NOTA: Permite cualquier origen - solo para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}
