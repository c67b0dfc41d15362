//! Compact day-cell labels: first words, event/holiday glyphs, weather
//! glyphs.
//!
//! The keyword tables are the original app's Hebrew vocabulary; matching is
//! plain substring containment, no stemming.

/// The first whitespace-separated word of a title, or `""`.
pub fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

const EVENT_GLYPHS: [(&[&str], &str); 6] = [
    (&["רופא", "מרפאה", "בדיקה"], "🏥"),
    (&["קניות", "סופר", "קניון"], "🛒"),
    (&["טיסה", "שדה", "נתב\"ג"], "✈️"),
    (&["מסעדה", "אוכל"], "🍽"),
    (&["אימון", "כושר", "חדר"], "💪"),
    (&["פגישה", "ישיבה", "כנס"], "📌"),
];

/// Glyph for an event title word, when the word matches a known category.
pub fn event_emoji(word: &str) -> Option<&'static str> {
    if word.is_empty() {
        return None;
    }
    EVENT_GLYPHS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| word.contains(k)))
        .map(|(_, glyph)| *glyph)
}

const HOLIDAY_GLYPHS: [(&[&str], &str); 10] = [
    (&["חנוכה"], "🕎"),
    (&["פסח"], "🍞"),
    (&["סוכות"], "⛺"),
    (&["שבועות"], "📜"),
    (&["ראש השנה"], "📯"),
    (&["יום הכיפורים"], "🤍"),
    (&["פורים"], "🎭"),
    (&["תשעה באב"], "🕯"),
    (&["ט\"ו בשבט", "ט״ו בשבט"], "🌳"),
    (&["ראש חודש"], "🌙"),
];

/// Glyph for a holiday title. Unknown holidays get ✨; an empty title gets
/// nothing.
pub fn holiday_emoji(title: &str) -> Option<&'static str> {
    if title.is_empty() {
        return None;
    }
    Some(
        HOLIDAY_GLYPHS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
            .map(|(_, glyph)| *glyph)
            .unwrap_or("✨"),
    )
}

/// Glyph for a WMO weather code (Open-Meteo `weathercode`), `None` code
/// shows the info glyph.
pub fn weather_emoji(code: Option<u8>) -> &'static str {
    match code {
        None => "ℹ️",
        Some(0) => "☀️",
        Some(1..=2) => "🌤",
        Some(3) => "☁️",
        Some(4..=48) => "🌫",
        Some(49..=55) => "🌦",
        Some(56..=65) => "🌧",
        Some(66..=82) => "🌧",
        Some(83..=86) => "🌨",
        Some(_) => "⛈",
    }
}
