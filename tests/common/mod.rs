#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use sos_notifier::SOS_PATH;

/// A request as seen by the stand-in dispatch server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

struct MockState {
    // Reply for the n-th request; the last entry repeats
    replies: Vec<(StatusCode, &'static str)>,
    delay: Option<Duration>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// Local dispatch server bound to an ephemeral port.
pub struct MockDispatch {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockDispatch {
    pub async fn start(replies: Vec<(StatusCode, &'static str)>) -> Self {
        Self::start_with_delay(replies, None).await
    }

    pub async fn start_with_delay(
        replies: Vec<(StatusCode, &'static str)>,
        delay: Option<Duration>,
    ) -> Self {
        let state = Arc::new(MockState {
            replies,
            delay,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route(SOS_PATH, post(send_sos))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub async fn ok() -> Self {
        Self::start(vec![(StatusCode::OK, r#"{"status":"ok"}"#)]).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn send_sos(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let index = {
        let mut requests = state.requests.lock().unwrap();
        requests.push(RecordedRequest {
            content_type: header_value(header::CONTENT_TYPE),
            user_agent: header_value(header::USER_AGENT),
            body,
        });
        requests.len() - 1
    };

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    let (status, body) = state
        .replies
        .get(index)
        .or_else(|| state.replies.last())
        .copied()
        .unwrap_or((StatusCode::OK, "{}"));

    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Origin with nothing listening on it, so connecting is refused.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
