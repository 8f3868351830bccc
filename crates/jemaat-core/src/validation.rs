//! Form field checks shared by store actions

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ValidationError};

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").expect("valid regex"));
static RAW_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{4})$").expect("valid regex"));

/// Parse a birth date typed as `DDMMYYYY`.
///
/// Separators are ignored (`30-07-1994` works). The date must be a real
/// calendar day after 1900.
pub fn parse_raw_birth_date(raw: &str) -> Option<NaiveDate> {
    let digits = NON_DIGIT.replace_all(raw, "");
    let caps = RAW_DATE.captures(&digits)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || year <= 1900 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Form variant of [`parse_raw_birth_date`] that reports bad input
pub fn birth_date_field(raw: &str) -> Result<NaiveDate> {
    parse_raw_birth_date(raw).ok_or_else(|| ValidationError::InvalidBirthDate.into())
}

/// Trimmed value, or `MissingField` when blank
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field).into());
    }
    Ok(value)
}

/// `value` trimmed, or `fallback` when blank
pub fn or_default(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Age in years as shown on the birthday screens: the difference of calendar years
pub fn age_in_year(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birth_date.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_birth_date() {
        assert_eq!(
            parse_raw_birth_date("30071994"),
            NaiveDate::from_ymd_opt(1994, 7, 30)
        );
        assert_eq!(
            parse_raw_birth_date("30-07-1994"),
            NaiveDate::from_ymd_opt(1994, 7, 30)
        );
    }

    #[test]
    fn test_parse_raw_birth_date_rejects() {
        assert_eq!(parse_raw_birth_date("3007199"), None);
        assert_eq!(parse_raw_birth_date("300719945"), None);
        assert_eq!(parse_raw_birth_date("30131994"), None);
        assert_eq!(parse_raw_birth_date("00071994"), None);
        assert_eq!(parse_raw_birth_date("30071899"), None);
        assert_eq!(parse_raw_birth_date("31022001"), None);
    }

    #[test]
    fn test_birth_date_field_error() {
        assert!(birth_date_field("12052001").is_ok());
        assert!(matches!(
            birth_date_field("2001-05-12"),
            Err(crate::error::Error::Validation(ValidationError::InvalidBirthDate))
        ));
    }

    #[test]
    fn test_require() {
        assert_eq!(require("name", "  Budi ").unwrap(), "Budi");
        assert!(require("name", "   ").is_err());
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default("", "-"), "-");
        assert_eq!(or_default(" x ", "-"), "x");
    }

    #[test]
    fn test_age_ignores_day_of_year() {
        let birth = NaiveDate::from_ymd_opt(1990, 12, 31).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(age_in_year(birth, today), 34);
    }
}
