//! Date helpers for spreadsheet-sourced `DD/MM/YYYY` values.
//!
//! All classification works on `NaiveDate` normalized to midnight; a date
//! that fails to parse becomes `None` and silently disables whatever branch
//! depended on it.

use chrono::{Datelike, NaiveDate};

/// Parses a `DD/MM/YYYY` string into a date.
///
/// Returns `None` for anything that is not exactly three `/`-separated
/// numeric segments forming a valid calendar date.
pub fn parse_dmy(value: &str) -> Option<NaiveDate> {
    let mut parts = value.trim().split('/');
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Renders a date back into the spreadsheet's `DD/MM/YYYY` form.
pub fn format_dmy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Whole days from `today` until `target`.
///
/// A target later the same day counts as 0, tomorrow as 1, yesterday as -1.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

/// Whole calendar months elapsed between `earlier` and `later`,
/// ignoring the day-of-month (year*12 + month arithmetic).
pub fn months_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    let earlier_months = earlier.year() as i64 * 12 + earlier.month0() as i64;
    let later_months = later.year() as i64 * 12 + later.month0() as i64;
    later_months - earlier_months
}

/// The (month, year) pair `lookahead` months after `today`'s month,
/// rolling the year forward when the lookahead crosses December.
pub fn month_with_lookahead(today: NaiveDate, lookahead: u32) -> (u32, i32) {
    let zero_based = today.month0() + lookahead;
    let month = zero_based % 12 + 1;
    let year = today.year() + (zero_based / 12) as i32;
    (month, year)
}

/// Resolves a bare day-of-month into a concrete date in the current month,
/// rolling forward to the same day next month when it has already passed
/// or does not exist this month (31 in a 30-day month).
///
/// Returns `None` when the day is not a calendar day at all.
pub fn resolve_day_of_month(today: NaiveDate, day: u32) -> Option<NaiveDate> {
    if !(1..=31).contains(&day) {
        return None;
    }
    let this_month = NaiveDate::from_ymd_opt(today.year(), today.month(), day);
    match this_month {
        Some(date) if date >= today => Some(date),
        _ => {
            let (month, year) = month_with_lookahead(today, 1);
            NaiveDate::from_ymd_opt(year, month, day)
        }
    }
}
