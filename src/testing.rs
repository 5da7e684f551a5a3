//! Shared fixtures for unit tests.

use crate::client::{MockTransport, RateClient};
use crate::config::Endpoints;
use crate::converter::Converter;

pub const PRIMARY: &str = "https://primary.test/currency-api@";
pub const MIRROR: &str = "https://mirror.test/currency-api@";
pub const FIXTURE_DATE: &str = "2024-04-30";

pub fn test_endpoints() -> Endpoints {
    Endpoints::new(PRIMARY, MIRROR)
}

pub fn currencies_json() -> String {
    serde_json::json!({
        "eur": "Euro",
        "gbp": "British Pound",
        "jpy": "Japanese Yen",
        "usd": "US Dollar",
        "xag": "Silver Ounce"
    })
    .to_string()
}

/// USD table; `gbp` arrives as a string and `xag` is absent on purpose
pub fn usd_rates_json() -> String {
    serde_json::json!({
        "date": FIXTURE_DATE,
        "usd": {
            "eur": 0.93,
            "gbp": "0.8",
            "jpy": 156.79775322,
            "usd": 1
        }
    })
    .to_string()
}

pub fn eur_rates_json() -> String {
    serde_json::json!({
        "date": FIXTURE_DATE,
        "eur": {
            "eur": 1,
            "jpy": 168.5,
            "usd": 1.07
        }
    })
    .to_string()
}

/// Transport serving the fixture documents from the primary host
pub fn fixture_transport() -> MockTransport {
    MockTransport::new()
        .with_response(
            format!("{PRIMARY}{FIXTURE_DATE}/v1/currencies.min.json"),
            currencies_json(),
        )
        .with_response(
            format!("{PRIMARY}{FIXTURE_DATE}/v1/currencies/usd.min.json"),
            usd_rates_json(),
        )
        .with_response(
            format!("{PRIMARY}{FIXTURE_DATE}/v1/currencies/eur.min.json"),
            eur_rates_json(),
        )
}

pub fn fixture_converter(transport: MockTransport) -> Converter<MockTransport> {
    let date = FIXTURE_DATE.parse().expect("fixture date");
    Converter::new(RateClient::new(transport, test_endpoints()), date)
}
