//! Clock-string parsing and the minute-offset interval type.
//!
//! All internal computation runs on integer minutes since midnight; `HH:MM`
//! strings exist only at the boundary. Parsing is strict (zero-padded,
//! 24-hour) so that formatting and parsing round-trip exactly for every
//! valid minute offset.

use crate::error::{LuachError, Result};

/// Number of minutes in a day. Valid minute offsets are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Parse a strict `HH:MM` clock string into minutes since midnight.
///
/// Accepts exactly five characters, zero-padded, 24-hour: hour 00–23,
/// minute 00–59.
///
/// # Errors
/// Returns [`LuachError::InvalidTimeFormat`] for anything else, including
/// unpadded forms like `"8:00"`.
pub fn clock_to_minutes(clock: &str) -> Result<u16> {
    let bytes = clock.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(LuachError::InvalidTimeFormat(clock.to_string()));
    }
    let digit = |b: u8| -> Result<u16> {
        if b.is_ascii_digit() {
            Ok(u16::from(b - b'0'))
        } else {
            Err(LuachError::InvalidTimeFormat(clock.to_string()))
        }
    };
    let hour = digit(bytes[0])? * 10 + digit(bytes[1])?;
    let minute = digit(bytes[3])? * 10 + digit(bytes[4])?;
    if hour > 23 || minute > 59 {
        return Err(LuachError::InvalidTimeFormat(clock.to_string()));
    }
    Ok(hour * 60 + minute)
}

/// Format minutes since midnight as a zero-padded `HH:MM` string.
///
/// Exact inverse of [`clock_to_minutes`] for all offsets in `0..1440`.
pub fn minutes_to_clock(minutes: u16) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A half-open time range `[start, end)` in minutes since midnight.
///
/// Invariant: `start < end`. Construction through [`TimeInterval::new`] or
/// [`TimeInterval::from_clock`] enforces the invariant; the free-time
/// resolver relies on it and never re-checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeInterval {
    pub start: u16,
    pub end: u16,
}

impl TimeInterval {
    /// Build an interval, rejecting `start >= end`.
    ///
    /// # Errors
    /// Returns [`LuachError::InvalidInterval`] when the range is empty or
    /// inverted.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start >= end {
            return Err(LuachError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build an interval from two `HH:MM` clock strings.
    ///
    /// # Errors
    /// Returns [`LuachError::InvalidTimeFormat`] for malformed strings and
    /// [`LuachError::InvalidInterval`] when `start >= end`.
    pub fn from_clock(start: &str, end: &str) -> Result<Self> {
        Self::new(clock_to_minutes(start)?, clock_to_minutes(end)?)
    }

    /// Length of the interval in minutes. Always positive.
    pub fn duration_minutes(&self) -> u16 {
        self.end - self.start
    }
}
