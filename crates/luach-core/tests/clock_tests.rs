//! Tests for clock-string parsing and interval validation.

use luach_core::error::LuachError;
use luach_core::{clock_to_minutes, minutes_to_clock, TimeInterval, MINUTES_PER_DAY};

#[test]
fn parses_known_times() {
    assert_eq!(clock_to_minutes("00:00").unwrap(), 0);
    assert_eq!(clock_to_minutes("07:00").unwrap(), 420);
    assert_eq!(clock_to_minutes("08:00").unwrap(), 480);
    assert_eq!(clock_to_minutes("17:00").unwrap(), 1020);
    assert_eq!(clock_to_minutes("18:30").unwrap(), 1110);
    assert_eq!(clock_to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn formats_known_offsets() {
    assert_eq!(minutes_to_clock(0), "00:00");
    assert_eq!(minutes_to_clock(420), "07:00");
    assert_eq!(minutes_to_clock(1110), "18:30");
    assert_eq!(minutes_to_clock(1439), "23:59");
}

#[test]
fn round_trips_every_minute_of_the_day() {
    for minutes in 0..MINUTES_PER_DAY {
        let clock = minutes_to_clock(minutes);
        assert_eq!(
            clock_to_minutes(&clock).unwrap(),
            minutes,
            "round trip failed for {clock}"
        );
    }
}

#[test]
fn rejects_malformed_clock_strings() {
    for bad in [
        "", "8:00", "08:0", "0800", "08-00", "24:00", "08:60", "99:99", "ab:cd", "08:00 ",
        "-1:00",
    ] {
        let err = clock_to_minutes(bad).unwrap_err();
        assert!(
            matches!(err, LuachError::InvalidTimeFormat(_)),
            "expected InvalidTimeFormat for '{bad}', got {err:?}"
        );
    }
}

#[test]
fn interval_rejects_start_not_before_end() {
    let err = TimeInterval::new(600, 600).unwrap_err();
    assert!(matches!(err, LuachError::InvalidInterval { start: 600, end: 600 }));

    let err = TimeInterval::new(700, 600).unwrap_err();
    assert!(matches!(err, LuachError::InvalidInterval { start: 700, end: 600 }));
}

#[test]
fn interval_from_clock_parses_both_ends() {
    let iv = TimeInterval::from_clock("08:00", "17:00").unwrap();
    assert_eq!((iv.start, iv.end), (480, 1020));
    assert_eq!(iv.duration_minutes(), 540);

    assert!(TimeInterval::from_clock("17:00", "08:00").is_err());
    assert!(TimeInterval::from_clock("8:00", "17:00").is_err());
}
