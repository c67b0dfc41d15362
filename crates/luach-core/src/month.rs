//! Month-grid construction for the calendar view.
//!
//! Weeks start on Sunday. Leading cells come from the previous month so the
//! first of the month lands on its weekday column; trailing cells pad the
//! grid to whole weeks.

use crate::error::{LuachError, Result};
use chrono::{Datelike, Days, NaiveDate};

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// Whether the cell belongs to the displayed month (as opposed to the
    /// leading/trailing padding).
    pub in_month: bool,
}

/// Build the Sunday-start grid of a month (`month` is 1–12).
///
/// The result length is always a multiple of 7.
///
/// # Errors
/// Returns [`LuachError::InvalidDateKey`] when year/month do not name a
/// real month.
pub fn month_matrix(year: i32, month: u32) -> Result<Vec<MonthCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LuachError::InvalidDateKey(format!("{year:04}-{month:02}")))?;

    let leading = first.weekday().num_days_from_sunday() as u64;
    let mut cells = Vec::new();

    // Leading days from the previous month.
    let mut date = first
        .checked_sub_days(Days::new(leading))
        .unwrap_or(NaiveDate::MIN);
    while date < first {
        cells.push(MonthCell {
            date,
            in_month: false,
        });
        date = date.succ_opt().unwrap_or(NaiveDate::MAX);
    }

    // The month itself.
    while date.month() == month && date.year() == year {
        cells.push(MonthCell {
            date,
            in_month: true,
        });
        date = date.succ_opt().unwrap_or(NaiveDate::MAX);
    }

    // Trailing padding to whole weeks.
    while cells.len() % 7 != 0 {
        cells.push(MonthCell {
            date,
            in_month: false,
        });
        date = date.succ_opt().unwrap_or(NaiveDate::MAX);
    }

    Ok(cells)
}
