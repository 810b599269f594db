//! Field-level validation shared by registration and edit commands.

use crate::error::{NhuError, Result};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check an email address against the federation's accepted shape.
pub fn validate_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(NhuError::InvalidEmail {
            email: email.to_string(),
        })
    }
}

/// Jersey numbers run 1 through 99 inclusive.
pub fn validate_jersey_number(number: u8) -> Result<()> {
    if (1..=99).contains(&number) {
        Ok(())
    } else {
        Err(NhuError::InvalidJerseyNumber {
            number: number as i64,
        })
    }
}

/// Reject empty or whitespace-only required fields.
pub fn require_field(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(NhuError::MissingField { field })
    } else {
        Ok(())
    }
}
