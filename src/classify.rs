//! Token classification for positional arguments and piped lines.

/// True when the token parses as a floating point number.
pub fn is_number(token: &str) -> bool {
    parse_amount(token).is_some()
}

/// Parse an amount token; `None` for anything that is not a number.
pub fn parse_amount(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

/// Currency codes are case-insensitive; they are displayed upper-case.
pub fn display_code(code: &str) -> String {
    code.to_uppercase()
}

/// Lookup key for a currency code.
pub fn lookup_key(code: &str) -> String {
    code.to_lowercase()
}
