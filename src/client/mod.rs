//! # Rate Client
//!
//! Fetches the two API documents: the list of supported currencies and the
//! rate table for a base currency. Each request goes to the primary host
//! first; on a transport failure the identical path is retried once against
//! the mirror.
//!
//! ```text
//! RateClient ──▶ Transport::get(primary + path) ──ok──▶ serde_json::Value
//!                       │ transport error
//!                       ▼
//!                Transport::get(mirror + path)  ──ok──▶ serde_json::Value
//! ```
//!
//! The network itself sits behind the [`Transport`] trait so the client can
//! be driven by [`MockTransport`] in tests.

use crate::classify::lookup_key;
use crate::config::Endpoints;
use crate::date_selector::DateSelector;
use crate::error::Result;
use crate::models::{CurrencyList, RateTable};
use serde_json::Value;

pub mod http;
pub mod mock;

pub use http::HttpTransport;
pub use mock::{MockTransport, RequestLog};

/// Blocking GET returning the response body
pub trait Transport {
    fn get(&self, url: &str) -> Result<String>;
}

/// Client for the currency API with mirror fallback
pub struct RateClient<T: Transport> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> RateClient<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch every supported currency code with its description
    pub fn fetch_currency_list(&self, date: &DateSelector) -> Result<CurrencyList> {
        let path = currency_list_path(date);
        tracing::debug!("Fetching currency list for {}", date);
        let document = self.fetch_json(&path)?;
        let list = CurrencyList::from_json(document)?;
        tracing::debug!("Currency list loaded with {} entries", list.len());
        Ok(list)
    }

    /// Fetch the full rate table for `base`
    pub fn fetch_rate_table(&self, date: &DateSelector, base: &str) -> Result<RateTable> {
        let path = rate_table_path(date, base);
        tracing::debug!("Fetching rate table for {} on {}", base, date);
        let document = self.fetch_json(&path)?;
        RateTable::from_json(base, document)
    }

    fn fetch_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.endpoints.primary(), path);
        let body = match self.transport.get(&url) {
            Ok(body) => body,
            Err(e) if e.is_transport() => {
                tracing::warn!("Primary endpoint failed ({e}), trying mirror");
                let mirror_url = format!("{}{}", self.endpoints.mirror(), path);
                self.transport.get(&mirror_url)?
            }
            Err(e) => return Err(e),
        };
        Ok(serde_json::from_str(&body)?)
    }
}

fn currency_list_path(date: &DateSelector) -> String {
    format!("{date}/v1/currencies.min.json")
}

fn rate_table_path(date: &DateSelector, base: &str) -> String {
    format!("{date}/v1/currencies/{}.min.json", lookup_key(base))
}
