//! Shared request input validations

use crate::errors::AppError;

/// Rejects absent or empty parameters. Whitespace is not trimmed; a blank
/// value still reaches the numeric parser and fails there.
pub fn require_param<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, AppError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::bad_request(
            "missing_parameter",
            format!("required parameter {name} is missing or empty"),
        )),
    }
}

pub fn parse_number(raw: &str, name: &'static str) -> Result<f64, AppError> {
    raw.parse::<f64>().map_err(|_| {
        AppError::bad_request(
            "invalid_number",
            format!("parameter {name} is not a valid number: {raw:?}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_number, require_param};

    #[test]
    fn accepts_present_parameter() {
        let value = require_param(Some("42"), "num1").expect("present parameter");
        assert_eq!(value, "42");
    }

    #[test]
    fn rejects_absent_parameter() {
        let error = require_param(None, "action").expect_err("expected missing parameter");
        assert!(error.to_string().contains("action"));
    }

    #[test]
    fn rejects_empty_parameter() {
        let error = require_param(Some(""), "num2").expect_err("expected empty parameter");
        assert!(error.to_string().contains("num2"));
    }

    #[test]
    fn parses_integer_decimal_and_negative_forms() {
        assert_eq!(parse_number("3", "num1").expect("integer"), 3.0);
        assert_eq!(parse_number("2.5", "num1").expect("decimal"), 2.5);
        assert_eq!(parse_number("-1.25", "num1").expect("negative"), -1.25);
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_number("1e3", "num2").expect("scientific"), 1000.0);
    }

    #[test]
    fn rejects_non_numeric_input() {
        let error = parse_number("seven", "num1").expect_err("expected parse failure");
        assert!(error.to_string().contains("num1"));
        assert!(error.to_string().contains("seven"));
    }

    #[test]
    fn rejects_blank_input() {
        parse_number(" ", "num2").expect_err("expected parse failure");
    }
}
