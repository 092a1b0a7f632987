#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use feedback_api::config::ServerConfig;
use feedback_api::router::build_app_router;
use feedback_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router, with every middleware layer, on top
/// of the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a division and a venue through the admin API, returning their ids.
pub async fn seed_reference(pool: &PgPool) -> (i64, i64) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/divisions",
        serde_json::json!({"name": "Retail"}),
    )
    .await;
    let division_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = post_json(
        build_test_app(pool.clone()),
        "/api/admin/venues",
        serde_json::json!({"name": "Main Hall"}),
    )
    .await;
    let venue_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    (division_id, venue_id)
}

/// A submission body in the shape the confirmation step posts.
pub fn submission_body(division_id: i64, venue_id: i64, scores: &[(i64, i64, i64)]) -> serde_json::Value {
    let responses: Vec<_> = scores
        .iter()
        .enumerate()
        .map(|(i, (a, r, p))| {
            serde_json::json!({
                "question": format!("Question {}", i + 1),
                "chatbot_answer": format!("Answer {}", i + 1),
                "accuracy_score": a,
                "relevancy_score": r,
                "performance_score": p,
                "additional_comments": "",
            })
        })
        .collect();
    serde_json::json!({
        "tester_name": "Ada",
        "division_id": division_id,
        "venue_id": venue_id,
        "session_datetime": "2024-05-20T10:15:00.000Z",
        "responses": responses,
    })
}
