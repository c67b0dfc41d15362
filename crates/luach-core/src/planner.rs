//! Day planning — wiring the recurring schedule and the event store into
//! the free-time resolver.

use crate::clock::TimeInterval;
use crate::error::Result;
use crate::freetime::{calc_free_time, FreeSlot};
use crate::schedule::auto_blocks_for_date;
use crate::store::EventStore;

/// Tunables for free-time computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// The bounded active period of a day considered for free time.
    pub window: TimeInterval,
    /// Duration assumed for events without an end time.
    pub default_duration_min: u16,
}

impl Default for PlannerConfig {
    /// 07:00–23:00 window, 30-minute default event duration.
    fn default() -> Self {
        PlannerConfig {
            window: TimeInterval {
                start: 7 * 60,
                end: 23 * 60,
            },
            default_duration_min: 30,
        }
    }
}

/// Every occupied interval of a day: recurring blocks plus user events.
///
/// # Errors
/// Propagates date-key, clock-parse, and interval-validation failures.
pub fn occupied_for_day(
    store: &EventStore,
    date_key: &str,
    config: &PlannerConfig,
) -> Result<Vec<TimeInterval>> {
    let mut occupied: Vec<TimeInterval> = auto_blocks_for_date(date_key)?
        .iter()
        .map(|block| block.interval)
        .collect();
    occupied.extend(store.occupied_for_day(date_key, config.default_duration_min)?);
    Ok(occupied)
}

/// Free time for one day, formatted for display.
///
/// Recurring blocks and the day's user events are resolved through the
/// free-time core within the configured window.
///
/// # Errors
/// Propagates date-key, clock-parse, and interval-validation failures.
pub fn free_time_for_day(
    store: &EventStore,
    date_key: &str,
    config: &PlannerConfig,
) -> Result<Vec<FreeSlot>> {
    let occupied = occupied_for_day(store, date_key, config)?;
    Ok(calc_free_time(config.window, &occupied))
}
