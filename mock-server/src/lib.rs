//! Recording stand-in for the Araria API.
//!
//! Every request outside `/__mock` is recorded and answered with a stubbed
//! response when one matches its method and path, otherwise with `200` and an
//! echo of what was received. Recorded requests and stubs are reachable over
//! HTTP under `/__mock` and directly through `MockState`.

use std::{collections::HashMap, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Multipart, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lower-case.
    pub headers: HashMap<String, String>,
    pub body: RecordedBody,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordedBody {
    Empty,
    Json { value: Value },
    Text { text: String },
    Multipart { parts: Vec<RecordedPart> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stub {
    pub method: String,
    pub path: String,
    pub status: u16,
    #[serde(default)]
    pub body: Value,
}

#[derive(Default)]
struct Inner {
    requests: Vec<RecordedRequest>,
    stubs: HashMap<(String, String), Stub>,
}

/// Shared recorder. Clones observe the same requests and stubs.
#[derive(Clone, Default)]
pub struct MockState {
    inner: Arc<RwLock<Inner>>,
}

impl MockState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `status` and `body` from now on.
    pub async fn stub(&self, stub: Stub) {
        let key = (stub.method.to_ascii_uppercase(), stub.path.clone());
        self.inner.write().await.stubs.insert(key, stub);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.read().await.requests.clone()
    }

    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.requests.clear();
        inner.stubs.clear();
    }
}

pub fn app(state: MockState) -> Router {
    Router::new()
        .route("/__mock/requests", get(list_requests).delete(clear))
        .route("/__mock/stubs", post(add_stub))
        .fallback(record)
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app(state)).await
}

async fn list_requests(State(state): State<MockState>) -> Json<Vec<RecordedRequest>> {
    Json(state.requests().await)
}

async fn clear(State(state): State<MockState>) -> StatusCode {
    state.clear().await;
    StatusCode::NO_CONTENT
}

async fn add_stub(State(state): State<MockState>, Json(stub): Json<Stub>) -> StatusCode {
    state.stub(stub).await;
    StatusCode::CREATED
}

async fn record(State(state): State<MockState>, request: Request<Body>) -> Response {
    let method = request.method().as_str().to_string();
    let path = request.uri().path().to_string();
    let headers = flatten_headers(request.headers());

    let body = match read_body(request).await {
        Ok(body) => body,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };
    debug!(%method, %path, "recorded request");

    let recorded = RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    };
    let echo = json!({
        "method": recorded.method,
        "path": recorded.path,
        "body": recorded.body,
    });

    let mut inner = state.inner.write().await;
    inner.requests.push(recorded);
    match inner.stubs.get(&(method, path)) {
        Some(stub) => {
            let status = StatusCode::from_u16(stub.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(stub.body.clone())).into_response()
        }
        None => (StatusCode::OK, Json(echo)).into_response(),
    }
}

fn flatten_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

async fn read_body(request: Request<Body>) -> Result<RecordedBody, String> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| e.body_text())?;
        let mut parts = Vec::new();
        while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let size = field.bytes().await.map_err(|e| e.body_text())?.len();
            parts.push(RecordedPart {
                name,
                file_name,
                content_type,
                size,
            });
        }
        return Ok(RecordedBody::Multipart { parts });
    }

    let bytes = to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| e.to_string())?;
    if bytes.is_empty() {
        return Ok(RecordedBody::Empty);
    }
    Ok(match serde_json::from_slice(&bytes) {
        Ok(value) => RecordedBody::Json { value },
        Err(_) => RecordedBody::Text {
            text: String::from_utf8_lossy(&bytes).into_owned(),
        },
    })
}
