//! `YYYY-MM-DD` date keys — the identifiers days are stored and queried by.

use crate::error::{LuachError, Result};
use chrono::NaiveDate;

/// Parse a strict `YYYY-MM-DD` date key.
///
/// # Errors
/// Returns [`LuachError::InvalidDateKey`] for malformed keys or impossible
/// dates (e.g. `2026-02-30`).
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .map_err(|_| LuachError::InvalidDateKey(key.to_string()))?;
    // chrono accepts unpadded fields; keys must be canonical so that string
    // ordering matches date ordering.
    if make_date_key(date) != key {
        return Err(LuachError::InvalidDateKey(key.to_string()));
    }
    Ok(date)
}

/// Format a date as a `YYYY-MM-DD` key. Inverse of [`parse_date_key`].
pub fn make_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
