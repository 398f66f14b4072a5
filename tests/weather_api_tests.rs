//! Tests de integración del API de clima
//!
//! Estos tests arman la aplicación completa con un cache en memoria y un
//! proveedor upstream simulado, y la ejercitan request por request.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tokio::sync::RwLock;
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weather_service::cache::{CacheConfig, CacheOperations};
use weather_service::config::environment::EnvironmentConfig;
use weather_service::create_app;
use weather_service::state::AppState;

/// Cache en memoria con la misma interfaz que el backend Redis
#[derive(Default)]
struct InMemoryCache {
    entries: RwLock<HashMap<String, (String, u64)>>,
}

#[async_trait::async_trait]
impl CacheOperations for InMemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), ttl_seconds));
        Ok(())
    }
}

fn test_config(upstream_url: &str) -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        redis_url: "redis://localhost:6379".to_string(),
        openweather_api_key: "test_key".to_string(),
        openweather_base_url: upstream_url.to_string(),
    }
}

fn test_app(upstream_url: &str, cache: Arc<InMemoryCache>) -> Router {
    let config = test_config(upstream_url);
    let cache_config = CacheConfig {
        redis_url: config.redis_url.clone(),
        default_ttl: 1800,
    };
    let state = AppState::new(config, cache_config, cache);
    create_app(state)
}

fn london_payload() -> serde_json::Value {
    json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [
            {"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}
        ],
        "main": {"temp": 15.2, "feels_like": 14.4, "pressure": 1023, "humidity": 62},
        "name": "London",
        "cod": 200
    })
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, payload)
}

#[tokio::test]
async fn test_cache_miss_returns_weather_and_populates_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "test_key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryCache::default());
    let app = test_app(&server.uri(), cache.clone());

    let (status, payload) = get(app, "/weather?city=London").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["city"], "London");
    assert_eq!(payload["temperature"], 15.2);
    assert_eq!(payload["description"], "clear sky");
    assert_eq!(payload["icon"], "01d");

    let entries = cache.entries.read().await;
    let (stored, ttl) = entries.get("weather:London").expect("cache entry should exist");
    assert_eq!(*ttl, 1800);
    let stored_payload: serde_json::Value = serde_json::from_str(stored).unwrap();
    assert_eq!(stored_payload, payload);
}

#[tokio::test]
async fn test_repeated_request_is_served_from_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryCache::default());
    let app = test_app(&server.uri(), cache);

    let first = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/weather?city=London")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let second = app
        .oneshot(
            Request::builder()
                .uri("/weather?city=London")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first_body = to_bytes(first.into_body(), usize::MAX).await.unwrap();
    let second_body = to_bytes(second.into_body(), usize::MAX).await.unwrap();
    assert_eq!(first_body, second_body);
}

#[tokio::test]
async fn test_distinct_cities_use_distinct_cache_entries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let mut paris = london_payload();
    paris["name"] = json!("Paris");
    paris["main"]["temp"] = json!(18.7);

    Mock::given(method("GET"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryCache::default());
    let app = test_app(&server.uri(), cache.clone());

    let (_, london) = get(app.clone(), "/weather?city=London").await;
    let (_, paris) = get(app, "/weather?city=Paris").await;

    assert_eq!(london["city"], "London");
    assert_eq!(paris["city"], "Paris");

    let entries = cache.entries.read().await;
    assert!(entries.contains_key("weather:London"));
    assert!(entries.contains_key("weather:Paris"));
}

#[tokio::test]
async fn test_unknown_city_maps_to_bad_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"cod": "404", "message": "city not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryCache::default());
    let app = test_app(&server.uri(), cache.clone());

    let (status, payload) = get(app, "/weather?city=Nowhere").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["detail"], "weather data not available");

    // Un fallo upstream no deja nada en cache
    assert!(cache.entries.read().await.is_empty());
}

#[tokio::test]
async fn test_malformed_upstream_body_is_internal_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cod": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let cache = Arc::new(InMemoryCache::default());
    let app = test_app(&server.uri(), cache);

    let (status, payload) = get(app, "/weather?city=London").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload["detail"], "internal server error");
}

#[tokio::test]
async fn test_missing_city_param_is_rejected() {
    let server = MockServer::start().await;

    let cache = Arc::new(InMemoryCache::default());
    let app = test_app(&server.uri(), cache);

    let response = app
        .oneshot(Request::builder().uri("/weather").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_check_reports_healthy() {
    let server = MockServer::start().await;

    let cache = Arc::new(InMemoryCache::default());
    let app = test_app(&server.uri(), cache);

    let (status, payload) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["service"], "weather-service");
    assert_eq!(payload["status"], "healthy");
}
