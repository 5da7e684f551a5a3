//! # Rate Data Models
//!
//! Both API documents are open-ended JSON objects keyed by currency code, so
//! they are kept as [`serde_json::Value`] maps and read through accessors
//! that check every shape before using it.

use crate::classify::{display_code, lookup_key};
use crate::error::{ConvertError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Supported currencies: lowercase code to description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyList {
    entries: BTreeMap<String, String>,
}

impl CurrencyList {
    pub fn from_json(document: Value) -> Result<Self> {
        let Value::Object(map) = document else {
            return Err(ConvertError::Document(
                "currency list is not a JSON object".to_string(),
            ));
        };

        let entries = map
            .into_iter()
            .map(|(code, desc)| {
                let desc = match desc {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (lookup_key(&code), desc)
            })
            .collect();

        Ok(Self { entries })
    }

    /// Case-insensitive membership test
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(&lookup_key(code))
    }

    /// Entries in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rates for one base currency on one date
///
/// The document looks like `{"date": "2024-04-30", "usd": {"jpy": 156.7, ...}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    date: Option<String>,
    rates: Map<String, Value>,
}

impl RateTable {
    pub fn from_json(base: &str, document: Value) -> Result<Self> {
        let base = lookup_key(base);
        let Value::Object(mut map) = document else {
            return Err(ConvertError::Document(
                "rate table is not a JSON object".to_string(),
            ));
        };

        let date = match map.remove("date") {
            Some(Value::String(date)) => Some(date),
            Some(other) => Some(other.to_string()),
            None => None,
        };

        let rates = match map.remove(&base) {
            Some(Value::Object(rates)) => rates,
            Some(_) => {
                return Err(ConvertError::Document(format!(
                    "rates for {} are not a JSON object",
                    display_code(&base)
                )))
            }
            None => {
                return Err(ConvertError::Document(format!(
                    "no rates for {} in response",
                    display_code(&base)
                )))
            }
        };

        Ok(Self { base, date, rates })
    }

    /// Lowercase base currency code
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Effective date of the rates, if the document carried one
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Rate from the base currency to `target`
    ///
    /// Rates normally arrive as JSON numbers, but numeric strings are
    /// accepted as well.
    pub fn rate(&self, target: &str) -> Result<f64> {
        let value = self
            .rates
            .get(&lookup_key(target))
            .ok_or_else(|| ConvertError::MissingRate {
                from: display_code(&self.base),
                to: display_code(target),
            })?;

        let rate = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        rate.ok_or_else(|| ConvertError::InvalidRate {
            from: display_code(&self.base),
            to: display_code(target),
        })
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
