use crate::error::{BillingError, Result};

/// Check the "YYYY-MM" shape of an accounting period, with month 01-12.
pub fn is_valid_competencia(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 || bytes[4] != b'-' {
        return false;
    }

    let (year, month) = (&bytes[..4], &bytes[5..]);
    if !year.iter().chain(month).all(u8::is_ascii_digit) {
        return false;
    }

    let month = (month[0] - b'0') * 10 + (month[1] - b'0');
    (1..=12).contains(&month)
}

/// Trim and validate a competencia given on the command line
pub fn parse_competencia(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if is_valid_competencia(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(BillingError::InvalidCompetencia(value.to_string()))
    }
}
