//! # HTTP Transport
//!
//! Production [`Transport`] backed by a blocking reqwest client.

use super::Transport;
use crate::error::{ConvertError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Transport that performs real HTTP GET requests
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport; `timeout` of `None` lets requests block indefinitely
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        tracing::debug!("Creating HTTP transport (timeout: {:?})", timeout);
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|source| ConvertError::Http {
                url: "(client setup)".to_string(),
                source,
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| ConvertError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConvertError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| ConvertError::Http {
            url: url.to_string(),
            source,
        })
    }
}
