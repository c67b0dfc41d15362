//! User-entered events and tasks.
//!
//! The wire shape matches the original sync layer's export: optional fields
//! are tolerated and an empty `end` string means "no end given". The
//! default-duration policy for endless events is applied here, at the
//! boundary — the free-time resolver only ever sees validated intervals.

use crate::clock::{clock_to_minutes, TimeInterval, MINUTES_PER_DAY};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Whether an entry is a timed event or a task on a day's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Event,
    Task,
}

fn default_owner() -> String {
    "both".to_string()
}

/// A user-entered calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Identifier assigned by the sync layer, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// `YYYY-MM-DD` date key; redundant with the store key, kept for
    /// round-tripping exports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Start clock time `HH:MM`. Entries without a start never occupy time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End clock time `HH:MM`. Absent or empty means "apply the default
    /// duration".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Opaque owner label; `"both"` denotes a shared entry.
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default)]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Reminder lead time in minutes, when a reminder was requested.
    /// The original sync export spells this `notifyMinutes`.
    #[serde(
        default,
        alias = "notifyMinutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub notify_minutes: Option<u32>,
}

impl Event {
    /// The occupied interval of this event, applying `default_duration_min`
    /// when no end time is given.
    ///
    /// Returns `Ok(None)` for entries without a start time — those never
    /// occupy time. A defaulted end is capped at 23:59 so it stays a valid
    /// minute offset; when the cap leaves nothing to occupy (a start at the
    /// last minute of the day), the entry is skipped the same way.
    ///
    /// # Errors
    /// Returns [`crate::LuachError::InvalidTimeFormat`] for malformed clock
    /// strings and [`crate::LuachError::InvalidInterval`] when the end does
    /// not come after the start.
    pub fn interval_with_default(&self, default_duration_min: u16) -> Result<Option<TimeInterval>> {
        let start_clock = match self.start.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(None),
        };
        let start = clock_to_minutes(start_clock)?;

        let end = match self.end.as_deref() {
            Some(e) if !e.is_empty() => clock_to_minutes(e)?,
            _ => {
                let end = (start + default_duration_min).min(MINUTES_PER_DAY - 1);
                if end <= start {
                    // A start at 23:59 leaves no room for the default
                    // duration; the entry occupies nothing.
                    return Ok(None);
                }
                end
            }
        };

        TimeInterval::new(start, end).map(Some)
    }
}
