//! Cache
//!
//! Este módulo contiene el colaborador de cache del servicio.

pub mod cache_config;
pub mod redis_client;

pub use cache_config::{CacheConfig, CacheOperations};
pub use redis_client::RedisClient;
