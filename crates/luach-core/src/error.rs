//! Error types for luach-core operations.

use thiserror::Error;

/// Errors that can occur at the validation boundary of luach-core.
///
/// The free-time resolver itself is total over validated input; every
/// failure mode lives in the parsing/validation layer that feeds it.
#[derive(Error, Debug)]
pub enum LuachError {
    /// A clock string did not match strict zero-padded 24-hour `HH:MM`.
    #[error("Invalid time format: '{0}' (expected zero-padded 24-hour HH:MM)")]
    InvalidTimeFormat(String),

    /// An interval's start was not strictly before its end.
    #[error("Invalid interval: start {start} >= end {end}")]
    InvalidInterval { start: u16, end: u16 },

    /// A date key did not match `YYYY-MM-DD` or named an impossible date.
    #[error("Invalid date key: '{0}' (expected YYYY-MM-DD)")]
    InvalidDateKey(String),

    /// An event export blob was not valid JSON in the expected shape.
    #[error("Event data parse error: {0}")]
    EventData(#[from] serde_json::Error),
}

/// Convenience alias used throughout luach-core.
pub type Result<T> = std::result::Result<T, LuachError>;
