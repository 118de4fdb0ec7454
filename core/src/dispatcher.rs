//! Validation and dispatch shared by every endpoint.
//!
//! # Design
//! The dispatcher holds only immutable settings (origin, path prefix, auth
//! header) plus the transport and hook handles, so one instance serves any
//! number of concurrent calls. A call is split the same way the network hop
//! splits it:
//! - `build_request` validates the payload and produces an `HttpRequest`
//!   (pure, synchronous);
//! - the `Transport` executes it;
//! - `parse_response` maps the status and decodes the body.
//!
//! A payload that fails validation never reaches the transport.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, EndpointDescriptor};
use crate::error::{
    ArariaError, ArariaResult, FieldIssue, IssueKind, TransportError, ValidationError,
};
use crate::hook::{Outcome, RequestEvent, RequestHook, TracingHook};
use crate::http::{FileUpload, HttpRequest, HttpResponse, RequestBody};
use crate::schema::json_type;
use crate::transport::Transport;

/// What a call sends besides its path parameters.
#[derive(Debug, Clone)]
pub enum Payload {
    None,
    Json(Value),
    File(FileUpload),
}

pub struct Dispatcher {
    base_url: String,
    path_prefix: &'static str,
    auth_header: (&'static str, String),
    transport: Arc<dyn Transport>,
    hook: Arc<dyn RequestHook>,
}

impl Dispatcher {
    pub fn new(config: &ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.resolved_base_url(),
            path_prefix: config.profile().path_prefix(),
            auth_header: config.auth_header(),
            transport,
            hook: Arc::new(TracingHook),
        }
    }

    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.hook = hook;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate `payload` against the endpoint's schema and describe the
    /// resulting call. Schemaless endpoints pass JSON through untouched.
    pub fn build_request(
        &self,
        endpoint: Endpoint,
        params: &[&str],
        payload: Payload,
    ) -> ArariaResult<HttpRequest> {
        let descriptor = endpoint.descriptor();
        let path = descriptor.render_path(params)?;

        let takes_file = endpoint == Endpoint::UploadFile;
        let body = match (descriptor.schema, payload) {
            (_, Payload::File(upload)) if takes_file => Some(RequestBody::Multipart(upload)),
            (_, Payload::File(_)) => {
                return Err(root_issue(&descriptor, invalid("object", "file")).into())
            }
            (_, Payload::Json(value)) if takes_file => {
                return Err(root_issue(&descriptor, invalid("file", json_type(&value))).into())
            }
            (_, Payload::None) if takes_file => {
                return Err(root_issue(&descriptor, IssueKind::Missing).into())
            }
            (Some(schema), Payload::Json(value)) => Some(json_body(&schema.validate(&value)?)?),
            (Some(schema), Payload::None) => Some(json_body(&schema.validate(&Value::Null)?)?),
            (None, Payload::Json(value)) => Some(json_body(&value)?),
            (None, Payload::None) => None,
        };

        let (auth_name, auth_value) = &self.auth_header;
        let mut headers = vec![(auth_name.to_string(), auth_value.clone())];
        if matches!(body, Some(RequestBody::Json(_))) {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }

        Ok(HttpRequest {
            method: descriptor.method,
            url: format!("{}/{}{path}", self.base_url, self.path_prefix),
            headers,
            body,
        })
    }

    /// Map a non-2xx status to `TransportError` and decode the body as `T`.
    ///
    /// A body that is not JSON, empty included, decodes as a JSON string of
    /// the raw text, so `Value` and `String` accept any successful response.
    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> ArariaResult<T> {
        check_status(&response)?;
        let value = match serde_json::from_str(&response.body) {
            Ok(value) => value,
            Err(_) => Value::String(response.body),
        };
        serde_json::from_value(value).map_err(|e| ArariaError::Deserialization(e.to_string()))
    }

    /// Build, execute and parse one call.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &[&str],
        payload: Payload,
    ) -> ArariaResult<T> {
        let request = match self.build_request(endpoint, params, payload) {
            Ok(request) => request,
            Err(err) => {
                self.hook.on_outcome(
                    endpoint,
                    &Outcome::Rejected {
                        reason: &err.to_string(),
                    },
                );
                return Err(err);
            }
        };

        self.hook.on_request(&RequestEvent {
            endpoint,
            method: request.method,
            url: &request.url,
        });

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                self.hook.on_outcome(
                    endpoint,
                    &Outcome::Failed {
                        reason: &err.to_string(),
                    },
                );
                return Err(err.into());
            }
        };

        self.hook.on_outcome(
            endpoint,
            &Outcome::Response {
                status: response.status,
            },
        );
        self.parse_response(response)
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("path_prefix", &self.path_prefix)
            .field("auth_header", &self.auth_header.0)
            .finish_non_exhaustive()
    }
}

fn json_body(value: &Value) -> ArariaResult<RequestBody> {
    serde_json::to_string(value)
        .map(RequestBody::Json)
        .map_err(|e| ArariaError::Serialization(e.to_string()))
}

/// A payload of the wrong kind for the endpoint, reported against the
/// payload root.
fn root_issue(descriptor: &EndpointDescriptor, kind: IssueKind) -> ValidationError {
    ValidationError {
        schema: descriptor.schema.map_or(descriptor.name, |schema| schema.name),
        issues: vec![FieldIssue {
            path: String::new(),
            kind,
        }],
    }
}

fn invalid(expected: &'static str, received: &'static str) -> IssueKind {
    IssueKind::InvalidType { expected, received }
}

fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
