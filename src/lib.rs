//! # fxconv - Command-line Currency Converter
//!
//! Converts an amount from one currency into one or more others using the
//! rates published by the free currency API on jsDelivr, with a mirror on
//! Cloudflare Pages as fallback.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  amounts  ┌───────────────┐  rates  ┌──────────────┐
//! │ AmountSource│──────────▶│   Converter   │◀────────│  RateClient  │
//! │ (args/pipe) │           │ (lazy caches) │         │ primary/     │
//! └─────────────┘           └───────┬───────┘         │ mirror       │
//!        ▲                          │ results         └──────┬───────┘
//!        │                          ▼                        │
//! ┌──────┴──────┐           ┌───────────────┐         ┌──────┴───────┐
//! │AppController│──────────▶│    Printer    │         │  Transport   │
//! │  (driver)   │           │ (plain / CSV) │         │ (reqwest)    │
//! └─────────────┘           └───────────────┘         └──────────────┘
//! ```

pub mod classify;
pub mod client;
pub mod cmd_args;
pub mod config;
pub mod controller;
pub mod converter;
pub mod date_selector;
pub mod error;
pub mod input;
pub mod models;
pub mod output;

#[cfg(test)]
mod testing;

// Re-export main types for easy access
pub use client::{HttpTransport, MockTransport, RateClient, Transport};
pub use cmd_args::CommandLineArgs;
pub use controller::AppController;
pub use converter::Converter;
pub use date_selector::DateSelector;
pub use error::{ConvertError, Result};
pub use input::{AmountSource, InputMode};
pub use models::{CurrencyList, RateTable};
pub use output::{OutputFormat, Printer};
