use crate::error::Result;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub use axum::http::StatusCode;

/// How the fake store answers requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behavior {
    /// Serve requests from the in-memory map.
    #[default]
    Healthy,
    /// Answer every request with this status and a JSON error body.
    Status(StatusCode),
    /// Answer every request with `200` and a body that is not JSON.
    MalformedBody,
}

struct Shared {
    token: String,
    values: Mutex<HashMap<String, String>>,
    behavior: Mutex<Behavior>,
    requests: AtomicUsize,
}

/// An in-process server speaking the Upstash REST dialect.
///
/// Supports `GET /get/{key}`, `POST /set/{key}` (value in the body) and
/// `POST /incr/{key}`, all guarded by a bearer token. The server stops when
/// this value is dropped.
pub struct FakeRestStore {
    addr: SocketAddr,
    shared: Arc<Shared>,
    server: JoinHandle<()>,
}

impl FakeRestStore {
    /// Binds an ephemeral local port and starts serving.
    pub async fn start(token: impl Into<String>) -> Result<Self> {
        let shared = Arc::new(Shared {
            token: token.into(),
            values: Mutex::new(HashMap::new()),
            behavior: Mutex::new(Behavior::default()),
            requests: AtomicUsize::new(0),
        });

        let router = Router::new()
            .route("/get/{key}", get(get_handler))
            .route("/set/{key}", post(set_handler))
            .route("/incr/{key}", post(incr_handler))
            .with_state(Arc::clone(&shared));

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("fake REST store stopped with an error: {e}");
            }
        });

        Ok(Self {
            addr,
            shared,
            server,
        })
    }

    /// Base URL to hand to a REST store client.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seeds a value directly, bypassing HTTP.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.shared.values.lock().insert(key.into(), value.into());
    }

    /// Reads a value directly, bypassing HTTP.
    pub fn value(&self, key: &str) -> Option<String> {
        self.shared.values.lock().get(key).cloned()
    }

    pub fn set_behavior(&self, behavior: Behavior) {
        *self.shared.behavior.lock() = behavior;
    }

    /// Number of requests received so far, authorized or not.
    pub fn request_count(&self) -> usize {
        self.shared.requests.load(Ordering::SeqCst)
    }
}

impl Drop for FakeRestStore {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Applies bookkeeping, auth and the configured behavior shared by all routes.
fn precheck(shared: &Shared, headers: &HeaderMap) -> Option<Response> {
    shared.requests.fetch_add(1, Ordering::SeqCst);

    let expected = format!("Bearer {}", shared.token);
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);
    if !authorized {
        return Some(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),
        );
    }

    match *shared.behavior.lock() {
        Behavior::Healthy => None,
        Behavior::Status(status) => {
            Some((status, Json(json!({ "error": "injected failure" }))).into_response())
        }
        Behavior::MalformedBody => Some((StatusCode::OK, "<html>not json</html>").into_response()),
    }
}

async fn get_handler(
    State(shared): State<Arc<Shared>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Some(response) = precheck(&shared, &headers) {
        return response;
    }

    let value = shared.values.lock().get(&key).cloned();
    Json(json!({ "result": value })).into_response()
}

async fn set_handler(
    State(shared): State<Arc<Shared>>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if let Some(response) = precheck(&shared, &headers) {
        return response;
    }

    shared.values.lock().insert(key, body);
    Json(json!({ "result": "OK" })).into_response()
}

async fn incr_handler(
    State(shared): State<Arc<Shared>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Some(response) = precheck(&shared, &headers) {
        return response;
    }

    let mut values = shared.values.lock();
    let current = match values.get(&key).map(|value| value.parse::<i64>()) {
        None => 0,
        Some(Ok(current)) => current,
        Some(Err(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "ERR value is not an integer or out of range" })),
            )
                .into_response();
        }
    };

    let next = current + 1;
    values.insert(key, next.to_string());
    Json(json!({ "result": next })).into_response()
}
