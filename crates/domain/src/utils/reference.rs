//! Estonian payment reference numbers (3-7-1 checksum)
//!
//! A reference is a digit string followed by one check digit. Digits are
//! weighted 7, 3, 1, 7, 3, 1, ... starting from the rightmost digit of the
//! base; the check digit brings the weighted sum up to the next multiple of
//! ten. Surrounding whitespace is trimmed, nothing else is normalized.

use crate::errors::{AccountingError, Result};

const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Append the 3-7-1 check digit to `base`.
///
/// # Errors
/// `InvalidInput` if `base` is empty after trimming or contains anything but
/// ASCII digits.
pub fn generate_reference(base: &str) -> Result<String> {
    let base = base.trim();
    if base.is_empty() {
        return Err(AccountingError::InvalidInput("reference base must not be empty".into()));
    }
    let digit = check_digit(base).ok_or_else(|| {
        AccountingError::InvalidInput(format!("reference base must contain only digits: {base:?}"))
    })?;
    Ok(format!("{base}{digit}"))
}

/// Whether `candidate` ends with the correct check digit for its prefix.
pub fn validate_reference(candidate: &str) -> bool {
    let candidate = candidate.trim();
    if candidate.len() < 2 || !is_digits(candidate) {
        return false;
    }
    let (base, provided) = candidate.split_at(candidate.len() - 1);
    check_digit(base).is_some_and(|expected| provided.as_bytes()[0] - b'0' == expected)
}

/// Check digit for a non-empty all-digit string.
fn check_digit(base: &str) -> Option<u8> {
    if base.is_empty() || !is_digits(base) {
        return None;
    }
    let sum: u32 = base
        .bytes()
        .rev()
        .zip(WEIGHTS.iter().cycle())
        .map(|(byte, weight)| u32::from(byte - b'0') * weight)
        .sum();
    // (10 - sum mod 10) mod 10 is always below 10
    u8::try_from((10 - sum % 10) % 10).ok()
}

fn is_digits(value: &str) -> bool {
    value.bytes().all(|byte| byte.is_ascii_digit())
}
