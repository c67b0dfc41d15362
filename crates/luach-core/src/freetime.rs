//! Free-time resolution — the complement of a day's commitments.
//!
//! Sorts occupied intervals by start, merges overlapping or touching ones,
//! then sweeps the day window emitting the gaps between merged blocks.
//! Pure functions throughout: inputs are never mutated and nothing is
//! retained across calls.

use crate::clock::{minutes_to_clock, TimeInterval};
use serde::{Deserialize, Serialize};

/// A free time slot, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    /// Slot start as zero-padded `HH:MM`.
    pub start: String,
    /// Slot end as zero-padded `HH:MM`.
    pub end: String,
    /// Slot length in minutes.
    pub duration_minutes: u16,
}

impl From<TimeInterval> for FreeSlot {
    fn from(interval: TimeInterval) -> Self {
        FreeSlot {
            start: minutes_to_clock(interval.start),
            end: minutes_to_clock(interval.end),
            duration_minutes: interval.duration_minutes(),
        }
    }
}

/// Merge overlapping or touching intervals into a sorted, non-overlapping
/// list.
///
/// Two intervals `[a,b)` and `[c,d)` (sorted so `a <= c`) merge when
/// `c <= b` — touching counts as contiguous, no minimum gap is required.
/// Merging happens in absolute minute space; callers that care about a
/// window clip afterwards.
pub fn merge_intervals(occupied: &[TimeInterval]) -> Vec<TimeInterval> {
    if occupied.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<TimeInterval> = occupied.to_vec();
    // Sort by start, then end, so equal starts merge deterministically.
    sorted.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or adjacent — extend the current block.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Compute the free intervals within `window` left by `occupied`.
///
/// `occupied` may be unsorted, overlapping, empty, or partially/fully
/// outside the window. The result is sorted by start, pairwise
/// non-overlapping, strictly inside `window`, and together with the merged,
/// window-clipped occupied intervals partitions `window` exactly. Empty
/// `occupied` yields `[window]`; zero-length intervals are never emitted.
pub fn free_intervals(window: TimeInterval, occupied: &[TimeInterval]) -> Vec<TimeInterval> {
    let merged = merge_intervals(occupied);

    let mut free = Vec::new();
    let mut cursor = window.start;

    for block in &merged {
        // Merged blocks are sorted; once one starts at or past the window
        // end, none of the rest can cover anything.
        if block.start >= window.end {
            break;
        }
        if block.start > cursor {
            free.push(TimeInterval {
                start: cursor,
                end: block.start,
            });
        }
        // Clamp so a block ending before the cursor never moves it back.
        cursor = cursor.max(block.end);
        if cursor >= window.end {
            break;
        }
    }

    // Trailing gap after the last covering block.
    if cursor < window.end {
        free.push(TimeInterval {
            start: cursor,
            end: window.end,
        });
    }

    free
}

/// Compute free time within `window` and format it for display.
///
/// Thin wrapper over [`free_intervals`]; internal computation stays in
/// integer minutes, the returned slots carry `HH:MM` strings.
pub fn calc_free_time(window: TimeInterval, occupied: &[TimeInterval]) -> Vec<FreeSlot> {
    free_intervals(window, occupied)
        .into_iter()
        .map(FreeSlot::from)
        .collect()
}

/// Find the first free interval of at least `min_minutes` within the window.
///
/// Delegates to [`free_intervals`] and returns the first gap meeting the
/// minimum length.
pub fn first_free_interval(
    window: TimeInterval,
    occupied: &[TimeInterval],
    min_minutes: u16,
) -> Option<TimeInterval> {
    free_intervals(window, occupied)
        .into_iter()
        .find(|iv| iv.duration_minutes() >= min_minutes)
}
