//! In-process catalog backend for exercising `HttpCatalog` over real HTTP.

#![allow(dead_code)]

use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the backend saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    /// Raw query string, exactly as sent.
    pub query: Option<String>,
}

/// Scripted reply. Unscripted requests get `{"items": []}`.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl MockResponse {
    pub fn json(value: serde_json::Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: value.to_string(),
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

#[derive(Default)]
struct Script {
    seen: Vec<CapturedRequest>,
    replies: VecDeque<MockResponse>,
}

type Shared = Arc<Mutex<Script>>;

pub struct MockBackend {
    pub addr: SocketAddr,
    script: Shared,
    stop: Option<oneshot::Sender<()>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let script = Shared::default();
        let router = Router::new()
            .route("/{*path}", any(reply))
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().unwrap();

        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stopped.await;
                })
                .await;
        });

        Self {
            addr,
            script,
            stop: Some(stop),
        }
    }

    /// Replies are handed out in the order they were enqueued.
    pub async fn enqueue_response(&self, response: MockResponse) {
        self.script.lock().unwrap().replies.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.lock().unwrap().seen.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn reply(State(script): State<Shared>, method: Method, uri: Uri) -> impl IntoResponse {
    let scripted = {
        let mut script = script.lock().unwrap();
        script.seen.push(CapturedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
        });
        script.replies.pop_front()
    };
    let response = scripted.unwrap_or_else(|| MockResponse::json(serde_json::json!({ "items": [] })));

    (
        StatusCode::from_u16(response.status).unwrap(),
        [(header::CONTENT_TYPE, response.content_type)],
        response.body,
    )
}
