//! Typed async client for the Araria image-generation and fashion-AI API.
//!
//! # Overview
//! `ArariaClient` exposes one async method per remote endpoint. Each call
//! validates its payload against a declarative schema, sends exactly one
//! HTTP request and returns the response body as-is.
//!
//! # Design
//! - The endpoint table (`Endpoint`) pairs every operation with its method,
//!   path template and optional `Schema`.
//! - `Dispatcher` does the work shared by all endpoints. `build_request` and
//!   `parse_response` are pure; the network hop sits behind the `Transport`
//!   trait so tests and hosts can supply their own.
//! - Two domain errors: `ValidationError` before any I/O, `TransportError`
//!   when the exchange fails. Nothing is retried.
//! - Request events go to an injected `RequestHook`, `tracing` by default.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod endpoint;
pub mod error;
pub mod hook;
pub mod http;
pub mod schema;
pub mod schemas;
pub mod transport;
pub mod types;

pub use client::ArariaClient;
pub use config::{AuthScheme, ClientConfig, DeploymentProfile, DEFAULT_BASE_URL};
pub use dispatcher::{Dispatcher, Payload};
pub use endpoint::{Endpoint, EndpointDescriptor};
pub use error::{ArariaError, ArariaResult, FieldIssue, IssueKind, TransportError, ValidationError};
pub use hook::{Outcome, RequestEvent, RequestHook, TracingHook};
pub use http::{FileUpload, HttpMethod, HttpRequest, HttpResponse, RequestBody};
pub use schema::{FieldKind, FieldSpec, Schema};
pub use transport::{ReqwestTransport, Transport};
pub use types::*;
