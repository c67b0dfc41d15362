//! Recurring daily blocks — the fixed household schedule.
//!
//! A pure lookup keyed by day-of-week: Sunday through Thursday carry a work
//! block and a food/personal block at fixed clock times, Friday and Saturday
//! carry none. The table is static; dates only matter through their weekday.

use crate::clock::TimeInterval;
use crate::datekey::parse_date_key;
use crate::error::Result;
use chrono::{Datelike, Weekday};

/// A fixed-schedule commitment applied uniformly on qualifying weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringBlock {
    /// Stable identifier (`"work"`, `"food"`).
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Occupied range, minutes since midnight.
    pub interval: TimeInterval,
}

/// The Sunday–Thursday schedule: work 08:00–17:00, food/personal 17:00–18:30.
const WEEKDAY_BLOCKS: [RecurringBlock; 2] = [
    RecurringBlock {
        id: "work",
        title: "עבודה",
        interval: TimeInterval {
            start: 8 * 60,
            end: 17 * 60,
        },
    },
    RecurringBlock {
        id: "food",
        title: "אוכל ומקלחת",
        interval: TimeInterval {
            start: 17 * 60,
            end: 18 * 60 + 30,
        },
    },
];

/// Recurring blocks for a given weekday.
///
/// The work week runs Sunday–Thursday; Friday and Saturday yield no blocks.
pub fn auto_blocks_for(weekday: Weekday) -> &'static [RecurringBlock] {
    if weekday.num_days_from_sunday() <= 4 {
        &WEEKDAY_BLOCKS
    } else {
        &[]
    }
}

/// Recurring blocks for a `YYYY-MM-DD` date key.
///
/// # Errors
/// Returns [`crate::LuachError::InvalidDateKey`] for malformed keys.
pub fn auto_blocks_for_date(date_key: &str) -> Result<&'static [RecurringBlock]> {
    let date = parse_date_key(date_key)?;
    Ok(auto_blocks_for(date.weekday()))
}
