//! # Rate Date Selector
//!
//! The API publishes one snapshot per day plus a moving `latest` tag. The
//! selector is validated before any network request is made.

use crate::error::ConvertError;
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const LATEST: &str = "latest";
const DATE_FORMAT: &str = "%Y-%m-%d";

fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex"))
}

/// Either the `latest` snapshot or a specific calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateSelector {
    #[default]
    Latest,
    Date(NaiveDate),
}

impl FromStr for DateSelector {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LATEST {
            return Ok(Self::Latest);
        }
        // chrono alone would accept single-digit months and days
        if !date_shape().is_match(s) {
            return Err(ConvertError::InvalidDate(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self::Date)
            .map_err(|_| ConvertError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for DateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST),
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}
