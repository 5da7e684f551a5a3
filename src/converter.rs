//! # Conversion Engine
//!
//! A [`Converter`] is one conversion session. It fetches the currency list
//! and each base currency's rate table the first time they are needed and
//! keeps them for the rest of the run; nothing is ever re-fetched.

use crate::classify::{display_code, lookup_key};
use crate::client::{RateClient, Transport};
use crate::date_selector::DateSelector;
use crate::error::{ConvertError, Result};
use crate::models::{CurrencyList, RateTable};
use std::collections::HashMap;

pub struct Converter<T: Transport> {
    client: RateClient<T>,
    date: DateSelector,
    currencies: Option<CurrencyList>,
    rate_tables: HashMap<String, RateTable>,
    /// Warnings waiting to be shown to the user, oldest first
    notices: Vec<String>,
}

impl<T: Transport> Converter<T> {
    pub fn new(client: RateClient<T>, date: DateSelector) -> Self {
        Self {
            client,
            date,
            currencies: None,
            rate_tables: HashMap::new(),
            notices: Vec::new(),
        }
    }

    pub fn date(&self) -> &DateSelector {
        &self.date
    }

    /// Supported currencies, fetched on first use
    pub fn currency_list(&mut self) -> Result<&CurrencyList> {
        let list = match self.currencies.take() {
            Some(list) => list,
            None => self.client.fetch_currency_list(&self.date)?,
        };
        Ok(self.currencies.insert(list))
    }

    /// Rate table for `base`, fetched on first use
    pub fn rate_table(&mut self, base: &str) -> Result<&RateTable> {
        let key = lookup_key(base);
        if !self.rate_tables.contains_key(&key) {
            let table = self.client.fetch_rate_table(&self.date, &key)?;
            tracing::debug!("Cached rate table for {} ({} rates)", key, table.len());
            self.rate_tables.insert(key.clone(), table);
        }
        self.rate_tables
            .get(&key)
            .ok_or_else(|| ConvertError::Document(format!("no rates for {}", display_code(&key))))
    }

    /// Case-insensitive check against the currency list
    ///
    /// An unknown code queues a `"<code> is not a currency"` notice.
    pub fn is_currency(&mut self, code: &str) -> Result<bool> {
        let known = self.currency_list()?.contains(code);
        if !known {
            tracing::debug!("Rejected currency code {:?}", code);
            self.notices.push(format!("{code} is not a currency"));
        }
        Ok(known)
    }

    /// Convert `amount` of `from` into `to`
    pub fn convert(&mut self, amount: f64, from: &str, to: &str) -> Result<f64> {
        if !self.is_currency(from)? {
            return Err(ConvertError::InvalidCurrency(display_code(from)));
        }
        if !self.is_currency(to)? {
            return Err(ConvertError::InvalidCurrency(display_code(to)));
        }
        let rate = self.rate_table(from)?.rate(to)?;
        Ok(rate * amount)
    }

    /// Effective date of the rates for `from`, if the table carries one
    pub fn rate_date(&mut self, from: &str) -> Result<Option<String>> {
        if !self.is_currency(from)? {
            return Err(ConvertError::InvalidCurrency(display_code(from)));
        }
        Ok(self.rate_table(from)?.date().map(str::to_string))
    }

    /// Drain queued notices
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}
