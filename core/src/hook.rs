//! Caller-supplied observation of dispatched requests.
//!
//! The dispatcher reports every outgoing request and every outcome to a
//! `RequestHook`. Callers inject their own to route events elsewhere. The
//! default `TracingHook` emits `tracing` events. Events never carry the API
//! key or request bodies.

use tracing::{debug, warn};

use crate::endpoint::Endpoint;
use crate::http::HttpMethod;

#[derive(Debug, Clone, Copy)]
pub struct RequestEvent<'a> {
    pub endpoint: Endpoint,
    pub method: HttpMethod,
    pub url: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub enum Outcome<'a> {
    /// The server answered; `status` may still be non-2xx.
    Response { status: u16 },
    /// The request never reached the transport.
    Rejected { reason: &'a str },
    /// No response arrived.
    Failed { reason: &'a str },
}

pub trait RequestHook: Send + Sync {
    fn on_request(&self, event: &RequestEvent<'_>);

    fn on_outcome(&self, _endpoint: Endpoint, _outcome: &Outcome<'_>) {}
}

/// Default hook, logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl RequestHook for TracingHook {
    fn on_request(&self, event: &RequestEvent<'_>) {
        debug!(
            endpoint = ?event.endpoint,
            method = %event.method,
            url = event.url,
            "dispatching request"
        );
    }

    fn on_outcome(&self, endpoint: Endpoint, outcome: &Outcome<'_>) {
        match outcome {
            Outcome::Response { status } if (200..300).contains(status) => {
                debug!(endpoint = ?endpoint, status, "request succeeded");
            }
            Outcome::Response { status } => {
                warn!(endpoint = ?endpoint, status, "request returned error status");
            }
            Outcome::Rejected { reason } => {
                debug!(endpoint = ?endpoint, reason, "request rejected before dispatch");
            }
            Outcome::Failed { reason } => {
                warn!(endpoint = ?endpoint, reason, "request failed");
            }
        }
    }
}
