//! Integration tests for the HTTP API
//!
//! Drives the router in-process with tower's `oneshot`.

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use common::*;
use rps_hand::config::GameConfig;
use rps_hand::core::create_router;
use serde_json::Value;
use tower::ServiceExt;

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn new_session(router: &Router, body: &str) -> String {
    let (status, json) = send(router, "POST", "/session/new", body.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    json["session_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health() {
    let router = create_router(GameConfig::default());
    let (status, json) = send(&router, "GET", "/health", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["sessions_active"], 0);
}

#[tokio::test]
async fn test_create_and_get_session() {
    let router = create_router(GameConfig::default());
    let id = new_session(&router, "{}").await;

    let (status, json) = send(&router, "GET", &format!("/session/{}", id), Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["session_id"], id.as_str());
    assert_eq!(json["phase"], "waiting");
    assert_eq!(json["tracker_state"], "IDLE");
    assert_eq!(json["computer"], "random");

    let (_, health) = send(&router, "GET", "/health", Body::empty()).await;
    assert_eq!(health["sessions_active"], 1);
}

#[tokio::test]
async fn test_unknown_session_is_404() {
    let router = create_router(GameConfig::default());
    let (status, json) = send(&router, "GET", "/session/nope", Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("nope"));

    let (status, _) = send(&router, "POST", "/session/nope/frame", "null").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_frame_is_400() {
    let router = create_router(GameConfig::default());
    let id = new_session(&router, "{}").await;
    let (status, json) = send(&router, "POST", &format!("/session/{}/frame", id), "{oops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_frames_play_a_round() {
    let router = create_router(GameConfig::default());
    let id = new_session(&router, r#"{"seed": 3}"#).await;
    let uri = format!("/session/{}/frame", id);

    let (status, first) = send(&router, "POST", &uri, frame_json(&paper())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["frame"]["gesture"], "paper");
    assert!(first["round"].is_null());

    let (_, second) = send(&router, "POST", &uri, frame_json(&paper())).await;
    assert_eq!(second["frame"]["confirmed"], "paper");
    assert_eq!(second["round"]["player"], "paper");
    assert_eq!(second["phase"], "showing_result");
    assert_eq!(second["score"]["wins"].as_u64().unwrap()
        + second["score"]["losses"].as_u64().unwrap()
        + second["score"]["draws"].as_u64().unwrap(), 1);

    let (_, status) = send(&router, "GET", &format!("/session/{}", id), Body::empty()).await;
    assert_eq!(status["computer"], "seeded");
    assert!(status["last_result"].is_object());
}

#[tokio::test]
async fn test_reset_clears_score() {
    let router = create_router(GameConfig::default());
    let id = new_session(&router, "{}").await;
    let uri = format!("/session/{}/frame", id);
    send(&router, "POST", &uri, "\"rock\"").await;
    send(&router, "POST", &uri, "\"rock\"").await;

    let uri = format!("/session/{}/reset", id);
    let (status, json) = send(&router, "POST", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["score"]["wins"], 0);
    assert_eq!(json["score"]["losses"], 0);
    assert_eq!(json["score"]["draws"], 0);
    assert_eq!(json["phase"], "waiting");
}

#[tokio::test]
async fn test_delete_session() {
    let router = create_router(GameConfig::default());
    let id = new_session(&router, "{}").await;
    let uri = format!("/session/{}", id);

    let (status, _) = send(&router, "DELETE", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, "GET", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&router, "DELETE", &uri, Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, health) = send(&router, "GET", "/health", Body::empty()).await;
    assert_eq!(health["sessions_active"], 0);
}

#[tokio::test]
async fn test_bare_label_frames() {
    let router = create_router(GameConfig::default());
    let id = new_session(&router, "{}").await;
    let uri = format!("/session/{}/frame", id);
    let (status, json) = send(&router, "POST", &uri, "scissors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["frame"]["gesture"], "scissors");
}
