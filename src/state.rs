//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use reqwest::Client;

use crate::cache::{CacheConfig, CacheOperations};
use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub cache_config: CacheConfig,
    pub cache: Arc<dyn CacheOperations>,
    pub http_client: Client,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        cache_config: CacheConfig,
        cache: Arc<dyn CacheOperations>,
    ) -> Self {
        Self {
            config,
            cache_config,
            cache,
            http_client: Client::new(),
        }
    }
}
