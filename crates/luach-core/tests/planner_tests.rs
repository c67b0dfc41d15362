//! End-to-end day planning: recurring schedule + event store → free time.

use luach_core::{free_time_for_day, occupied_for_day, Event, EventKind, EventStore, PlannerConfig, TimeInterval};

fn event(title: &str, start: &str, end: Option<&str>) -> Event {
    Event {
        id: None,
        title: title.to_string(),
        date: None,
        start: Some(start.to_string()),
        end: end.map(str::to_string),
        owner: "both".to_string(),
        kind: EventKind::Event,
        address: None,
        notify_minutes: None,
    }
}

#[test]
fn default_config_matches_the_household_window() {
    let config = PlannerConfig::default();
    assert_eq!(config.window, TimeInterval::new(420, 1380).unwrap());
    assert_eq!(config.default_duration_min, 30);
}

#[test]
fn work_day_without_events() {
    // 2026-08-24 is a Monday: work + food blocks only.
    let store = EventStore::new();
    let free = free_time_for_day(&store, "2026-08-24", &PlannerConfig::default()).unwrap();

    assert_eq!(free.len(), 2);
    assert_eq!((free[0].start.as_str(), free[0].end.as_str()), ("07:00", "08:00"));
    assert_eq!((free[1].start.as_str(), free[1].end.as_str()), ("18:30", "23:00"));
}

#[test]
fn work_day_with_evening_event() {
    // An evening event 20:00–21:00 splits the after-dinner gap.
    let mut store = EventStore::new();
    store
        .add_event("2026-08-24", event("הורים של ננה", "20:00", Some("21:00")))
        .unwrap();

    let free = free_time_for_day(&store, "2026-08-24", &PlannerConfig::default()).unwrap();

    assert_eq!(free.len(), 3);
    assert_eq!((free[0].start.as_str(), free[0].end.as_str()), ("07:00", "08:00"));
    assert_eq!((free[1].start.as_str(), free[1].end.as_str()), ("18:30", "20:00"));
    assert_eq!((free[2].start.as_str(), free[2].end.as_str()), ("21:00", "23:00"));
}

#[test]
fn weekend_day_with_single_short_event() {
    // 2026-08-29 is a Saturday: no recurring blocks, one event 16:40 with
    // the 30-minute default end.
    let mut store = EventStore::new();
    store
        .add_event("2026-08-29", event("קפה עם חברים", "16:40", None))
        .unwrap();

    let free = free_time_for_day(&store, "2026-08-29", &PlannerConfig::default()).unwrap();

    assert_eq!(free.len(), 2);
    assert_eq!((free[0].start.as_str(), free[0].end.as_str()), ("07:00", "16:40"));
    assert_eq!((free[1].start.as_str(), free[1].end.as_str()), ("17:10", "23:00"));
}

#[test]
fn event_overlapping_work_block_merges_into_it() {
    // A meeting 16:00–17:30 straddles the work/food boundary; the whole
    // afternoon stays one busy block and free time is unchanged.
    let mut store = EventStore::new();
    store
        .add_event("2026-08-24", event("ישיבת צוות", "16:00", Some("17:30")))
        .unwrap();

    let config = PlannerConfig::default();
    let occupied = occupied_for_day(&store, "2026-08-24", &config).unwrap();
    assert_eq!(occupied.len(), 3);

    let free = free_time_for_day(&store, "2026-08-24", &config).unwrap();
    assert_eq!(free.len(), 2);
    assert_eq!((free[1].start.as_str(), free[1].end.as_str()), ("18:30", "23:00"));
}

#[test]
fn custom_window_narrows_the_result() {
    let store = EventStore::new();
    let config = PlannerConfig {
        window: TimeInterval::from_clock("09:00", "12:00").unwrap(),
        default_duration_min: 30,
    };

    // Monday: work covers 08:00–17:00, swallowing the whole custom window.
    let free = free_time_for_day(&store, "2026-08-24", &config).unwrap();
    assert!(free.is_empty());

    // Saturday: nothing occupies the window.
    let free = free_time_for_day(&store, "2026-08-29", &config).unwrap();
    assert_eq!(free.len(), 1);
    assert_eq!((free[0].start.as_str(), free[0].end.as_str()), ("09:00", "12:00"));
}
