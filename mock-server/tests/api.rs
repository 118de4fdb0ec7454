use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, MockState, RecordedBody, RecordedRequest, Stub};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- echo ---

#[tokio::test]
async fn unknown_route_echoes_json_body() {
    let resp = app(MockState::new())
        .oneshot(json_request("POST", "/img/generate", r#"{"positivePrompt":"a cat"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Value = body_json(resp).await;
    assert_eq!(echo["method"], "POST");
    assert_eq!(echo["path"], "/img/generate");
    assert_eq!(echo["body"], json!({"kind": "json", "value": {"positivePrompt": "a cat"}}));
}

#[tokio::test]
async fn bodiless_request_is_recorded_as_empty() {
    let state = MockState::new();
    let resp = app(state.clone())
        .oneshot(empty_request("DELETE", "/files/f1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = state.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/files/f1");
    assert_eq!(requests[0].body, RecordedBody::Empty);
}

#[tokio::test]
async fn non_json_body_is_recorded_as_text() {
    let state = MockState::new();
    app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/llm/prompt-generate")
                .body("not json".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    let requests = state.requests().await;
    assert_eq!(
        requests[0].body,
        RecordedBody::Text {
            text: "not json".to_string()
        }
    );
}

#[tokio::test]
async fn headers_are_recorded() {
    let state = MockState::new();
    app(state.clone())
        .oneshot(
            Request::builder()
                .uri("/models")
                .header("X-Araria-Key", "abc123")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let requests = state.requests().await;
    assert_eq!(requests[0].header("x-araria-key"), Some("abc123"));
}

// --- multipart ---

#[tokio::test]
async fn multipart_upload_is_summarized() {
    let state = MockState::new();
    let boundary = "XBOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"cat.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         pngdata\r\n\
         --{boundary}--\r\n"
    );
    let resp = app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/files/upload")
                .header(
                    http::header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let requests = state.requests().await;
    let RecordedBody::Multipart { parts } = &requests[0].body else {
        panic!("expected multipart body, got {:?}", requests[0].body);
    };
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "file");
    assert_eq!(parts[0].file_name.as_deref(), Some("cat.png"));
    assert_eq!(parts[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(parts[0].size, "pngdata".len());
}

// --- stubs ---

#[tokio::test]
async fn stub_overrides_echo() {
    let state = MockState::new();
    state
        .stub(Stub {
            method: "GET".to_string(),
            path: "/models".to_string(),
            status: 500,
            body: json!({"message": "boom"}),
        })
        .await;

    let resp = app(state.clone())
        .oneshot(empty_request("GET", "/models"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!({"message": "boom"}));
    assert_eq!(state.requests().await.len(), 1);
}

#[tokio::test]
async fn stub_can_be_registered_over_http() {
    let state = MockState::new();
    let resp = app(state.clone())
        .oneshot(json_request(
            "POST",
            "/__mock/stubs",
            r#"{"method":"GET","path":"/files","status":200,"body":[{"id":"f1"}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app(state.clone())
        .oneshot(empty_request("GET", "/files"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body, json!([{"id": "f1"}]));
}

// --- admin ---

#[tokio::test]
async fn admin_routes_are_not_recorded() {
    let state = MockState::new();
    app(state.clone())
        .oneshot(empty_request("GET", "/fashion-model"))
        .await
        .unwrap();

    let resp = app(state.clone())
        .oneshot(empty_request("GET", "/__mock/requests"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let recorded: Vec<RecordedRequest> = body_json(resp).await;
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].path, "/fashion-model");

    let resp = app(state.clone())
        .oneshot(empty_request("DELETE", "/__mock/requests"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(state.requests().await.is_empty());
}
