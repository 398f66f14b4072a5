//! Configuración de cache
//!
//! Este módulo contiene la configuración y el contrato de operaciones
//! del sistema de cache.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    pub default_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://redis:6379".to_string(),
            default_ttl: 1800, // 30 minutos
        }
    }
}

/// Operaciones de cache
///
/// Contrato mínimo del colaborador: lectura por clave y escritura con TTL.
/// Trabaja a nivel de String serializado para mantener el trait object-safe;
/// la (de)serialización es responsabilidad del servicio que lo usa.
#[async_trait::async_trait]
pub trait CacheOperations: Send + Sync {
    /// Leer el valor de una clave. `None` significa ausente o expirado.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Escribir un valor con expiración en segundos (SETEX).
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()>;
}
