//! HTTP + WebSocket API
//!
//! Endpoints:
//! - POST /session/new - Create new game session
//! - GET /session/:id - Get session status
//! - DELETE /session/:id - End session (closes its WebSocket streams)
//! - POST /session/:id/frame - Submit one frame
//! - POST /session/:id/reset - Clear score
//! - WS /ws/:id - Live frame reports (text messages are accepted as frames)
//! - GET /health - Health check

use axum::{
    extract::{Path, State, WebSocketUpgrade, ws::{Message, WebSocket}},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::config::GameConfig;
use crate::core::frames::{parse_frame, FrameInput};
use crate::core::game::{FrameReport, GameSession, SessionStatus};

/// Session entry
#[derive(Debug)]
pub struct Session {
    pub id: String,
    pub game: GameSession,
    pub update_tx: broadcast::Sender<FrameReport>,
}

/// App state
pub struct AppState {
    pub sessions: RwLock<HashMap<String, Session>>,
    pub config: GameConfig,
}

/// Create new session request
#[derive(Debug, Default, Deserialize)]
pub struct NewSessionRequest {
    /// Seed for reproducible computer moves
    pub seed: Option<u64>,
}

/// Create new session response
#[derive(Debug, Serialize)]
pub struct NewSessionResponse {
    pub session_id: String,
    pub websocket_url: String,
}

/// Session status response
#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub status: SessionStatus,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sessions_active: usize,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse { error: error.into() }))
}

fn not_found(id: &str) -> ApiError {
    api_error(StatusCode::NOT_FOUND, format!("session '{}' not found", id))
}

/// Create the API router
pub fn create_router(config: GameConfig) -> Router {
    let state = Arc::new(AppState {
        sessions: RwLock::new(HashMap::new()),
        config,
    });

    Router::new()
        .route("/health", get(health))
        .route("/session/new", post(create_session))
        .route("/session/:id", get(get_session).delete(delete_session))
        .route("/session/:id/frame", post(submit_frame))
        .route("/session/:id/reset", post(reset_session))
        .route("/ws/:id", get(websocket_handler))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.sessions.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        sessions_active: sessions.len(),
    })
}

/// Create new session
async fn create_session(
    State(state): State<Arc<AppState>>,
    body: Option<Json<NewSessionRequest>>,
) -> Json<NewSessionResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let config = GameConfig {
        seed: req.seed.or(state.config.seed),
        ..state.config.clone()
    };

    let session_id = uuid::Uuid::new_v4().to_string();
    let (tx, _) = broadcast::channel(100);
    let session = Session {
        id: session_id.clone(),
        game: GameSession::new(&config),
        update_tx: tx,
    };

    tracing::info!(%session_id, seed = ?config.seed, "session created");
    state.sessions.write().await.insert(session_id.clone(), session);

    Json(NewSessionResponse {
        websocket_url: format!("/ws/{}", session_id),
        session_id,
    })
}

/// Get session status
async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, ApiError> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or_else(|| not_found(&id))?;

    Ok(Json(SessionStatusResponse {
        status: session.game.status(),
        session_id: id,
    }))
}

/// End a session
async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.sessions.write().await.remove(&id).ok_or_else(|| not_found(&id))?;
    tracing::info!(session_id = %id, "session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Submit one frame to a session
async fn submit_frame(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: String,
) -> Result<Json<FrameReport>, ApiError> {
    let frame = parse_frame(&body).map_err(|e| api_error(StatusCode::BAD_REQUEST, e.to_string()))?;
    let report = apply_frame(&state, &id, &frame).await.ok_or_else(|| not_found(&id))?;
    Ok(Json(report))
}

/// Clear score and round state
async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionStatusResponse>, ApiError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&id).ok_or_else(|| not_found(&id))?;
    session.game.reset();
    tracing::info!(session_id = %id, "session reset");

    Ok(Json(SessionStatusResponse {
        status: session.game.status(),
        session_id: id,
    }))
}

/// Run a frame through a session and broadcast the report
async fn apply_frame(state: &AppState, id: &str, frame: &FrameInput) -> Option<FrameReport> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(id)?;
    let report = frame.apply(&mut session.game);
    // No subscribers is fine
    let _ = session.update_tx.send(report.clone());
    Some(report)
}

/// WebSocket handler for live updates
async fn websocket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, ApiError> {
    let sessions = state.sessions.read().await;
    let session = sessions.get(&id).ok_or_else(|| not_found(&id))?;
    let rx = session.update_tx.subscribe();
    drop(sessions);

    Ok(ws.on_upgrade(move |socket| async move {
        handle_websocket(socket, state, id, rx).await;
    }))
}

/// Forward session reports to the socket; frames sent by the client are applied
async fn handle_websocket(
    socket: WebSocket,
    state: Arc<AppState>,
    id: String,
    mut rx: broadcast::Receiver<FrameReport>,
) {
    let (mut sink, mut stream) = socket.split();

    let mut forward = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(report) => {
                    let json = serde_json::to_string(&report).unwrap_or_default();
                    if sink.send(Message::Text(json)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "websocket client lagging, reports dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let mut receive = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            let Message::Text(text) = message else {
                continue;
            };
            match parse_frame(&text) {
                Ok(frame) => {
                    if apply_frame(&state, &id, &frame).await.is_none() {
                        break;
                    }
                }
                Err(e) => tracing::debug!(error = %e, "ignoring bad websocket frame"),
            }
        }
    });

    tokio::select! {
        _ = &mut forward => receive.abort(),
        _ = &mut receive => forward.abort(),
    }
}

/// Run the API server
pub async fn run_server(addr: &str, config: GameConfig) -> std::io::Result<()> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "rps-hand API listening");
    println!("✊✋✌️  rps-hand API running on {}", addr);
    println!("  POST /session/new        - Create session");
    println!("  GET  /session/:id        - Get status");
    println!("  DELETE /session/:id      - End session");
    println!("  POST /session/:id/frame  - Submit frame");
    println!("  POST /session/:id/reset  - Reset score");
    println!("  WS   /ws/:id             - Live updates");
    println!("  GET  /health             - Health check");
    axum::serve(listener, router).await
}
