//! # luach-core
//!
//! Deterministic day-planning core for a Hebrew–Gregorian family calendar.
//!
//! The centerpiece is the free-time resolver: given a day's fixed
//! commitments (recurring work/meal blocks plus user-entered events), it
//! computes the complementary set of open intervals within a bounded daily
//! window. Everything runs on integer minutes since midnight; `HH:MM`
//! strings exist only at the parse/format boundary.
//!
//! ## Quick start
//!
//! ```rust
//! use luach_core::{calc_free_time, TimeInterval};
//!
//! // 07:00–23:00 window, work 08:00–17:00 and food 17:00–18:30 occupied.
//! let window = TimeInterval::from_clock("07:00", "23:00").unwrap();
//! let occupied = vec![
//!     TimeInterval::from_clock("08:00", "17:00").unwrap(),
//!     TimeInterval::from_clock("17:00", "18:30").unwrap(),
//! ];
//!
//! let free = calc_free_time(window, &occupied);
//! assert_eq!(free.len(), 2);
//! assert_eq!((free[0].start.as_str(), free[0].end.as_str()), ("07:00", "08:00"));
//! assert_eq!((free[1].start.as_str(), free[1].end.as_str()), ("18:30", "23:00"));
//! ```
//!
//! ## Modules
//!
//! - [`freetime`] — interval merge + sweep free-time resolver
//! - [`clock`] — strict `HH:MM` ↔ minute-offset conversion, `TimeInterval`
//! - [`schedule`] — weekday-keyed recurring block table
//! - [`event`] / [`store`] — user events and the per-day event store
//! - [`planner`] — schedule + store composed over the resolver
//! - [`datekey`] — `YYYY-MM-DD` keys
//! - [`month`] — Sunday-start month grid
//! - [`hebrew`] / [`labels`] — Hebrew numerals and display glyphs
//! - [`error`] — error types

pub mod clock;
pub mod datekey;
pub mod error;
pub mod event;
pub mod freetime;
pub mod hebrew;
pub mod labels;
pub mod month;
pub mod planner;
pub mod schedule;
pub mod store;

pub use clock::{clock_to_minutes, minutes_to_clock, TimeInterval, MINUTES_PER_DAY};
pub use datekey::{make_date_key, parse_date_key};
pub use error::LuachError;
pub use event::{Event, EventKind};
pub use freetime::{calc_free_time, first_free_interval, free_intervals, merge_intervals, FreeSlot};
pub use hebrew::hebrew_numeral;
pub use month::{month_matrix, MonthCell};
pub use planner::{free_time_for_day, occupied_for_day, PlannerConfig};
pub use schedule::{auto_blocks_for, auto_blocks_for_date, RecurringBlock};
pub use store::EventStore;
