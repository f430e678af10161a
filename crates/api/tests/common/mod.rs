use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use premiere_api::config::ServerConfig;
use premiere_api::live::LiveBoard;
use premiere_api::router::build_app_router;
use premiere_api::state::AppState;
use premiere_api::ws::WsManager;
use premiere_geocode::GeocodeClient;

/// Build a test `ServerConfig` with safe defaults.
///
/// The geocode base URL points at an unroutable address so only
/// seed-table postal codes resolve, keeping tests deterministic and
/// off the network.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        premiere_threshold: 100,
        geocode_base_url: "http://127.0.0.1:1".to_string(),
        geocode_timeout_secs: 2,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Mirrors the construction in `main.rs` (same `build_app_router`) so
/// integration tests exercise the production middleware stack. The
/// live board starts empty, matching a fresh test database.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ws_manager: Arc::new(WsManager::new()),
        event_bus: Arc::new(premiere_events::EventBus::default()),
        live_board: Arc::new(LiveBoard::new()),
        geocode: Arc::new(GeocodeClient::new(
            config.geocode_base_url.clone(),
            Duration::from_secs(config.geocode_timeout_secs),
        )),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Post a valid signup form and assert it was created.
pub async fn create_signup(app: Router, name: &str, email: &str, zip: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/api/v1/signups",
        serde_json::json!({ "name": name, "email": email, "zip": zip }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
