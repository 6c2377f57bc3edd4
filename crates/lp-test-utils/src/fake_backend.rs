use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;

type Shared = Arc<Mutex<BackendState>>;
type Handler = Arc<dyn Fn(&Value) -> (u16, Value) + Send + Sync>;

/// How the fake answers one route.
#[derive(Clone)]
pub enum Reply {
    Json(u16, Value),
    Text(u16, String),
    /// Computed from the parsed request body.
    Dynamic(Handler),
    /// Accept the request and never answer.
    Stall,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self::Json(200, body)
    }

    pub fn dynamic(handler: impl Fn(&Value) -> (u16, Value) + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(handler))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Parsed JSON body, `Value::Null` when empty or not JSON.
    pub body: Value,
}

#[derive(Default)]
struct BackendState {
    routes: HashMap<(String, String), Reply>,
    requests: Vec<RecordedRequest>,
}

/// axum server on `127.0.0.1` that answers every path from the route table.
pub struct FakeBackend {
    addr: SocketAddr,
    state: Shared,
}

impl FakeBackend {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Shared::default();

        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Register the reply for `method path`, replacing any earlier one.
    pub fn route(&self, method: &str, path: &str, reply: Reply) -> &Self {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert((method.to_uppercase(), path.to_string()), reply);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

/// A base URL nothing listens on.
pub async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn handle(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let request = RecordedRequest {
        method: method.as_str().to_uppercase(),
        path: uri.path().to_string(),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    tracing::debug!(method = %request.method, path = %request.path, "fake backend request");

    let reply = {
        let mut state = state.lock().unwrap();
        state.requests.push(request.clone());
        state
            .routes
            .get(&(request.method.clone(), request.path.clone()))
            .cloned()
    };

    let (status, body) = match reply {
        Some(Reply::Json(status, body)) => (status, body.to_string()),
        Some(Reply::Text(status, body)) => (status, body),
        Some(Reply::Dynamic(handler)) => {
            let (status, body) = handler(&request.body);
            (status, body.to_string())
        }
        Some(Reply::Stall) => {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            return StatusCode::GATEWAY_TIMEOUT.into_response();
        }
        None => (404, json!({"detail": "Not Found"}).to_string()),
    };

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
