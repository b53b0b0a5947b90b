#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use url_shortener_client::domain::gateways::{Clipboard, ClipboardError};
use url_shortener_client::view::{AnalyticsPanel, Notice, ResultCard, View};

pub const CREATED_AT: &str = "2024-01-15T14:30:00.123456";

/// Requests received by the mock backend.
#[derive(Clone, Default)]
pub struct Recorded {
    pub shorten_bodies: Arc<Mutex<Vec<Value>>>,
    pub stats_codes: Arc<Mutex<Vec<String>>>,
}

impl Recorded {
    pub fn shorten_bodies(&self) -> Vec<Value> {
        self.shorten_bodies.lock().unwrap().clone()
    }

    pub fn stats_codes(&self) -> Vec<String> {
        self.stats_codes.lock().unwrap().clone()
    }
}

/// Mock of the shortening backend.
///
/// - alias `taken` answers 409, alias `html` answers a non-JSON 502
/// - an empty `long_url` answers a 422 validation list, a blank one a 400
/// - stats for `missing` answer 404, for `gone` answer 410
pub fn backend_router(recorded: Recorded) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/shorten", post(shorten))
        .route("/stats/{code}", get(stats))
        .with_state(recorded)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "Backend is running" }))
}

async fn shorten(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.shorten_bodies.lock().unwrap().push(body.clone());

    if body["long_url"].as_str() == Some("") {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "detail": [
                    { "loc": ["body", "long_url"], "msg": "field required", "type": "value_error.missing" }
                ]
            })),
        )
            .into_response();
    }

    if body["long_url"].as_str().is_some_and(|url| url.trim().is_empty()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Invalid URL" })),
        )
            .into_response();
    }

    let code = match body.get("custom_alias").and_then(Value::as_str) {
        Some("taken") => {
            return (
                StatusCode::CONFLICT,
                Json(json!({ "detail": "Custom alias already in use" })),
            )
                .into_response();
        }
        Some("html") => {
            return (StatusCode::BAD_GATEWAY, "<html>Bad gateway</html>").into_response();
        }
        Some(alias) => alias.to_string(),
        None => "aB3xY9".to_string(),
    };

    Json(json!({
        "short_code": code,
        "short_url": format!("http://127.0.0.1:8000/{}", code)
    }))
    .into_response()
}

async fn stats(State(recorded): State<Recorded>, Path(code): Path<String>) -> Response {
    recorded.stats_codes.lock().unwrap().push(code.clone());

    match code.as_str() {
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({ "detail": "Short URL not found" })),
        )
            .into_response(),
        "gone" => (
            StatusCode::GONE,
            Json(json!({ "detail": "This short URL has expired and is no longer available" })),
        )
            .into_response(),
        _ => Json(json!({
            "short_code": code,
            "original_url": "https://example.com",
            "clicks": 3,
            "created_at": CREATED_AT
        }))
        .into_response(),
    }
}

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Starts the mock backend and returns its base URL with the request log.
pub async fn spawn_shortener() -> (String, Recorded) {
    let recorded = Recorded::default();
    let base_url = spawn_backend(backend_router(recorded.clone())).await;
    (base_url, recorded)
}

/// Base URL of a port nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// View that keeps everything it was asked to show.
#[derive(Default)]
pub struct RecordingView {
    pub notices: Mutex<Vec<Notice>>,
    pub cards: Mutex<Vec<ResultCard>>,
    pub panels: Mutex<Vec<AnalyticsPanel>>,
}

impl RecordingView {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn cards(&self) -> Vec<ResultCard> {
        self.cards.lock().unwrap().clone()
    }

    pub fn panels(&self) -> Vec<AnalyticsPanel> {
        self.panels.lock().unwrap().clone()
    }
}

impl View for RecordingView {
    fn alert(&self, notice: &Notice) {
        self.notices.lock().unwrap().push(notice.clone());
    }

    fn show_result(&self, card: &ResultCard) {
        self.cards.lock().unwrap().push(card.clone());
    }

    fn render_analytics(&self, panel: &AnalyticsPanel) {
        self.panels.lock().unwrap().push(panel.clone());
    }
}

/// In-memory clipboard.
#[derive(Default)]
pub struct MemoryClipboard {
    pub writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
