//! `luach` CLI — query a family-calendar event export from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free time on a day (events piped via stdin)
//! echo '{}' | luach free --date 2026-08-24
//!
//! # Free time from an export file, custom window and default duration
//! luach free --date 2026-08-24 -i events.json --window 09:00-22:00 --default-duration 45
//!
//! # The day's agenda: recurring blocks plus user events
//! luach agenda --date 2026-08-24 -i events.json
//!
//! # Upcoming tasks (31 days by default)
//! luach tasks --from 2026-08-23 -i events.json
//!
//! # Search event titles
//! luach search --query פגישה -i events.json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use luach_core::labels::{event_emoji, first_word};
use luach_core::{
    auto_blocks_for_date, free_time_for_day, EventKind, EventStore, PlannerConfig, TimeInterval,
};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "luach", version, about = "Family calendar day-planning CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the free time of a day
    Free {
        /// Day to compute, as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Event export JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day window as HH:MM-HH:MM (default 07:00-23:00)
        #[arg(long)]
        window: Option<String>,
        /// Assumed duration in minutes for events without an end time
        #[arg(long, default_value_t = 30)]
        default_duration: u16,
    },
    /// List a day's recurring blocks and user events
    Agenda {
        /// Day to list, as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Event export JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// List upcoming tasks
    Tasks {
        /// First day of the range, as YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Number of days to look ahead
        #[arg(long, default_value_t = 31)]
        days: u64,
        /// Event export JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Search event titles
    Search {
        /// Substring to look for
        #[arg(long)]
        query: String,
        /// Event export JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Free {
            date,
            input,
            window,
            default_duration,
        } => {
            let store = load_store(input.as_deref())?;
            let mut config = PlannerConfig {
                default_duration_min: default_duration,
                ..PlannerConfig::default()
            };
            if let Some(raw) = window {
                config.window = parse_window(&raw)?;
            }

            let free = free_time_for_day(&store, &date, &config)
                .with_context(|| format!("Failed to compute free time for {date}"))?;

            if free.is_empty() {
                println!("No free time on {date}.");
            } else {
                for slot in &free {
                    println!("{}–{} ({} min)", slot.start, slot.end, slot.duration_minutes);
                }
            }
        }
        Commands::Agenda { date, input } => {
            let store = load_store(input.as_deref())?;
            let blocks = auto_blocks_for_date(&date)
                .with_context(|| format!("Failed to read schedule for {date}"))?;
            let events = store.events_for_day(&date);

            if blocks.is_empty() && events.is_empty() {
                println!("Nothing planned on {date}.");
                return Ok(());
            }

            for block in blocks {
                println!(
                    "{}–{}  {}  [auto]",
                    luach_core::minutes_to_clock(block.interval.start),
                    luach_core::minutes_to_clock(block.interval.end),
                    block.title
                );
            }
            for event in &events {
                let start = event.start.as_deref().unwrap_or("--:--");
                let end = event
                    .end
                    .as_deref()
                    .filter(|e| !e.is_empty())
                    .map(|e| format!("–{e}"))
                    .unwrap_or_default();
                let kind = match event.kind {
                    EventKind::Task => "task",
                    EventKind::Event => "event",
                };
                let glyph = event_emoji(first_word(&event.title))
                    .map(|g| format!("{g} "))
                    .unwrap_or_default();
                println!(
                    "{start}{end}  {glyph}{}  [{kind} • {}]",
                    event.title, event.owner
                );
            }
        }
        Commands::Tasks { from, days, input } => {
            let store = load_store(input.as_deref())?;
            let tasks = store
                .tasks_within(&from, days)
                .with_context(|| format!("Failed to list tasks from {from}"))?;

            if tasks.is_empty() {
                println!("No tasks in the next {days} days.");
            } else {
                for (date_key, task) in &tasks {
                    println!("{date_key}  {}", task.title);
                }
            }
        }
        Commands::Search { query, input } => {
            let store = load_store(input.as_deref())?;
            let hits = store.search(&query);

            if hits.is_empty() {
                println!("No results for '{query}'.");
            } else {
                println!("{} result(s):", hits.len());
                for (date_key, event) in &hits {
                    println!("{date_key}  {}", event.title);
                }
            }
        }
    }

    Ok(())
}

/// Parse a `HH:MM-HH:MM` window argument.
fn parse_window(raw: &str) -> Result<TimeInterval> {
    let Some((start, end)) = raw.split_once('-') else {
        bail!("Invalid window '{raw}': expected HH:MM-HH:MM");
    };
    TimeInterval::from_clock(start, end).with_context(|| format!("Invalid window '{raw}'"))
}

/// Load the event store from a file or stdin.
fn load_store(path: Option<&str>) -> Result<EventStore> {
    let json = read_input(path)?;
    if json.trim().is_empty() {
        // No export piped in: an empty store, not an error.
        return Ok(EventStore::new());
    }
    EventStore::from_json(&json).context("Failed to parse event export")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
