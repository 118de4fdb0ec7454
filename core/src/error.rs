//! Error types for the Araria client.
//!
//! # Design
//! Two domain failures exist: a payload rejected locally before any network
//! call (`ValidationError`) and an HTTP exchange that failed
//! (`TransportError`). The remaining `ArariaError` variants cover caller or
//! environment mistakes such as a missing API key or a path template filled
//! with the wrong number of parameters.

use std::fmt;

use thiserror::Error;

pub type ArariaResult<T> = Result<T, ArariaError>;

/// Errors returned by `ArariaClient` and `Dispatcher`.
#[derive(Debug, Error)]
pub enum ArariaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("endpoint {endpoint} expects {expected} path parameter(s), got {actual}")]
    PathParams {
        endpoint: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ArariaError {
    /// HTTP status of a failed exchange, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ArariaError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// The HTTP exchange failed. Surfaced to the caller as-is, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// No response was received.
    #[error("request could not be completed: {0}")]
    Network(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(_) => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            TransportError::Status { body, .. } => Some(body),
            TransportError::Network(_) => None,
        }
    }
}

/// A payload did not match its request schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{schema} rejected: {}", join_issues(.issues))]
pub struct ValidationError {
    pub schema: &'static str,
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Paths of every offending field, in the order they were found.
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.path.as_str()).collect()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One violation. `path` is dotted for nested objects and indexed for array
/// items (`input.model_input`, `prompts[2]`); empty means the payload itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub path: String,
    pub kind: IssueKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "payload" } else { &self.path };
        match self.kind {
            IssueKind::Missing => write!(f, "{path} is required"),
            IssueKind::InvalidType { expected, received } => {
                write!(f, "{path} expected {expected}, received {received}")
            }
        }
    }
}
