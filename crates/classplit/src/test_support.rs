//! In-process stand-in for a chat-completions endpoint.

use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

/// What the mock endpoint saw on its last request.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

pub struct MockEndpoint {
    pub url: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockEndpoint {
    pub fn captured(&self) -> Option<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

/// Build an OpenAI-style response body with a single choice.
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

/// Spawn a server on a random port that answers every POST with `status` and `reply`.
pub async fn spawn_endpoint(status: StatusCode, reply: String) -> MockEndpoint {
    let captured = Arc::new(Mutex::new(None));

    let app = Router::new().route(
        "/v1/chat/completions",
        post({
            let captured = Arc::clone(&captured);
            move |headers: HeaderMap, body: String| {
                let captured = Arc::clone(&captured);
                let reply = reply.clone();
                async move {
                    let authorization = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);
                    *captured.lock().unwrap() = Some(CapturedRequest {
                        authorization,
                        body,
                    });
                    (status, reply)
                }
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockEndpoint {
        url: format!("http://{addr}/v1/chat/completions"),
        captured,
        _handle: handle,
    }
}
