//! A host-supplied transport: blocking `ureq` behind the async `Transport`
//! trait, executed on tokio's blocking pool.
//!
//! # Design
//! Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
//! responses come back as data, leaving status interpretation to the
//! dispatcher exactly as with the default transport.

use std::sync::Arc;

use araria_core::{
    ArariaClient, ArariaError, ClientConfig, DecorRequest, FileUpload, HttpMethod, HttpRequest,
    HttpResponse, RequestBody, Transport, TransportError,
};
use async_trait::async_trait;
use mock_server::{MockState, RecordedBody, Stub};
use serde_json::json;

struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn execute_blocking(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, TransportError> {
    let url = req.url;
    let headers = req.headers;
    let result = match (req.method, req.body) {
        (_, Some(RequestBody::Multipart(_))) => {
            return Err(TransportError::Network(
                "multipart bodies are not supported by this transport".to_string(),
            ))
        }
        (HttpMethod::Get, _) => with_headers(agent.get(&url), &headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(&url), &headers).call(),
        (HttpMethod::Post, Some(RequestBody::Json(body))) => {
            with_headers(agent.post(&url), &headers).send(body.as_bytes())
        }
        (HttpMethod::Post, None) => with_headers(agent.post(&url), &headers).send_empty(),
        (HttpMethod::Put, Some(RequestBody::Json(body))) => {
            with_headers(agent.put(&url), &headers).send(body.as_bytes())
        }
        (HttpMethod::Put, None) => with_headers(agent.put(&url), &headers).send_empty(),
    };

    let mut response = result.map_err(|e| TransportError::Network(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TransportError::Network(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?
    }
}

async fn start_server() -> (String, MockState) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = MockState::new();
    tokio::spawn(mock_server::run(listener, state.clone()));
    (format!("http://{addr}"), state)
}

fn client(base_url: String) -> ArariaClient {
    ArariaClient::with_transport(
        ClientConfig::new("abc123").with_base_url(base_url),
        Arc::new(UreqTransport::new()),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn fashion_model_lifecycle_over_ureq() {
    let (base_url, state) = start_server().await;
    state
        .stub(Stub {
            method: "GET".to_string(),
            path: "/fashion-model/m1".to_string(),
            status: 200,
            body: json!({"id": "m1", "status": "ready"}),
        })
        .await;
    let client = client(base_url);

    let prime = DecorRequest {
        prompt: "sage green walls".to_string(),
    };
    client.generate_decor_prime_walls(&prime).await.unwrap();

    let model = client.get_fashion_model("m1").await.unwrap();
    assert_eq!(model, json!({"id": "m1", "status": "ready"}));

    client.regenerate_fashion_model("m1").await.unwrap();
    client.delete_fashion_model("m1").await.unwrap();

    let requests = state.requests().await;
    let seen: Vec<(&str, &str)> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.path.as_str()))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("POST", "/img/prime-walls"),
            ("GET", "/fashion-model/m1"),
            ("POST", "/fashion-model/regenerate/m1"),
            ("DELETE", "/fashion-model/m1"),
        ]
    );
    assert_eq!(
        requests[0].body,
        RecordedBody::Json {
            value: json!({"prompt": "sage green walls"})
        }
    );
    assert!(requests
        .iter()
        .all(|r| r.header("x-araria-key") == Some("abc123")));
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_is_interpreted_by_the_dispatcher() {
    let (base_url, state) = start_server().await;
    state
        .stub(Stub {
            method: "DELETE".to_string(),
            path: "/files/f1".to_string(),
            status: 404,
            body: json!({"message": "not found"}),
        })
        .await;

    let err = client(base_url).delete_file("f1").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test(flavor = "multi_thread")]
async fn unsupported_body_fails_in_the_transport() {
    let (base_url, state) = start_server().await;
    let err = client(base_url)
        .upload_file(FileUpload::new("a.bin", vec![1, 2, 3]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ArariaError::Transport(TransportError::Network(_))
    ));
    assert!(state.requests().await.is_empty());
}
