//! In-memory event store keyed by `YYYY-MM-DD` date keys.
//!
//! Mirrors the shape the original sync layer kept in the remote database:
//! a map of date key to a set of events. The store is a plain value: load
//! it from an export blob and query it. Remote transport is someone else's
//! concern.

use std::collections::BTreeMap;

use crate::clock::TimeInterval;
use crate::datekey::{make_date_key, parse_date_key};
use crate::error::Result;
use crate::event::{Event, EventKind};
use chrono::Days;
use serde::{Deserialize, Serialize};

/// The export wire shape: `{date_key: {push_id: event}}`.
type RawExport = BTreeMap<String, BTreeMap<String, Event>>;

/// Per-day collection of user events, ordered by date key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventStore {
    days: BTreeMap<String, Vec<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON export blob shaped `{date_key: {id: event}}`.
    ///
    /// Push ids become the events' `id` fields. Date keys are validated.
    ///
    /// # Errors
    /// Returns [`crate::LuachError::EventData`] for malformed JSON and
    /// [`crate::LuachError::InvalidDateKey`] for bad keys.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawExport = serde_json::from_str(json)?;
        let mut store = Self::new();
        for (date_key, day) in raw {
            for (id, mut event) in day {
                if event.id.is_none() {
                    event.id = Some(id);
                }
                store.add_event(&date_key, event)?;
            }
        }
        Ok(store)
    }

    /// Add an event under a date key.
    ///
    /// # Errors
    /// Returns [`crate::LuachError::InvalidDateKey`] for malformed keys.
    pub fn add_event(&mut self, date_key: &str, event: Event) -> Result<()> {
        parse_date_key(date_key)?;
        self.days.entry(date_key.to_string()).or_default().push(event);
        Ok(())
    }

    /// The events of one day, sorted by start time (startless entries
    /// first, as the original day view ordered them).
    pub fn events_for_day(&self, date_key: &str) -> Vec<Event> {
        let mut events = self.days.get(date_key).cloned().unwrap_or_default();
        events.sort_by(|a, b| a.start.cmp(&b.start));
        events
    }

    /// Validated occupied intervals for one day's events.
    ///
    /// Applies the default-duration policy to events without an end and
    /// skips events without a start.
    ///
    /// # Errors
    /// Propagates clock-parse and interval-validation failures.
    pub fn occupied_for_day(
        &self,
        date_key: &str,
        default_duration_min: u16,
    ) -> Result<Vec<TimeInterval>> {
        let mut occupied = Vec::new();
        for event in self.days.get(date_key).into_iter().flatten() {
            if let Some(interval) = event.interval_with_default(default_duration_min)? {
                occupied.push(interval);
            }
        }
        Ok(occupied)
    }

    /// Tasks in the `days`-day window starting at `from_key`, inclusive on
    /// both ends, ordered by date.
    ///
    /// # Errors
    /// Returns [`crate::LuachError::InvalidDateKey`] when `from_key` is
    /// malformed.
    pub fn tasks_within(&self, from_key: &str, days: u64) -> Result<Vec<(String, Event)>> {
        let from = parse_date_key(from_key)?;
        let limit = from
            .checked_add_days(Days::new(days))
            .map(make_date_key)
            .unwrap_or_else(|| "9999-12-31".to_string());

        let mut tasks = Vec::new();
        for (date_key, day) in self.days.range(from_key.to_string()..=limit) {
            for event in day {
                if event.kind == EventKind::Task {
                    tasks.push((date_key.clone(), event.clone()));
                }
            }
        }
        Ok(tasks)
    }

    /// All events whose title contains `query`, ordered by date key.
    pub fn search(&self, query: &str) -> Vec<(String, Event)> {
        let mut out = Vec::new();
        for (date_key, day) in &self.days {
            for event in day {
                if event.title.contains(query) {
                    out.push((date_key.clone(), event.clone()));
                }
            }
        }
        out
    }

    /// Number of days that have at least one event.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
