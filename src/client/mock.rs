//! # Mock Transport for Testing
//!
//! Serves canned bodies per URL and records every request so tests can check
//! which hosts were contacted and how often.

use super::Transport;
use crate::error::{ConvertError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned outcome for a single URL
#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Failure(u16),
}

/// Shared record of requested URLs
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    requests: Arc<Mutex<Vec<String>>>,
}

impl RequestLog {
    /// URLs in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Number of requests whose URL contains `fragment`
    pub fn count_matching(&self, fragment: &str) -> usize {
        self.requests()
            .iter()
            .filter(|url| url.contains(fragment))
            .count()
    }

    fn record(&self, url: &str) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
    }
}

/// Transport with pre-programmed responses
///
/// URLs without a programmed response answer with HTTP 404.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: HashMap<String, MockResponse>,
    log: RequestLog,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses
            .insert(url.into(), MockResponse::Body(body.into()));
        self
    }

    /// Answer `url` with a non-success HTTP status
    pub fn with_failure(mut self, url: impl Into<String>, status: u16) -> Self {
        self.responses
            .insert(url.into(), MockResponse::Failure(status));
        self
    }

    /// Handle to the request log that stays valid after the transport is moved
    pub fn request_log(&self) -> RequestLog {
        self.log.clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<String> {
        self.log.record(url);
        match self.responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Failure(status)) => Err(ConvertError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(ConvertError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_transport_should_serve_programmed_bodies() {
        let transport = MockTransport::new().with_response("http://a/x", "{}");
        assert_eq!(transport.get("http://a/x").unwrap(), "{}");
    }

    #[test]
    fn mock_transport_should_fail_unknown_urls() {
        let transport = MockTransport::new();
        let err = transport.get("http://a/missing").unwrap_err();
        assert!(matches!(err, ConvertError::Status { status: 404, .. }));
    }

    #[test]
    fn request_log_should_survive_move() {
        let transport = MockTransport::new().with_failure("http://a/x", 500);
        let log = transport.request_log();
        let moved = transport;

        let _ = moved.get("http://a/x");
        let _ = moved.get("http://a/y");

        assert_eq!(log.requests(), vec!["http://a/x", "http://a/y"]);
        assert_eq!(log.count_matching("/x"), 1);
    }
}
