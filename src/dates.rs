//! School-days-remaining computation.
//!
//! Counts the weekdays between today and the break date and formats the
//! result for the countdown view. Holidays and teacher workdays are not
//! modeled - that is exactly why the app reminds the user to check the
//! official school calendar once a month.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Break date plus the formatted days-remaining value shown on screen.
pub struct Dates {
    /// The first day of summer break.
    pub break_date: NaiveDate,
    /// Display string for the countdown (e.g. "12").
    pub found_value: String,
}

impl Dates {
    /// Creates a new instance and computes the initial value for `today`.
    pub fn new(break_date: NaiveDate, today: NaiveDate) -> Self {
        let mut dates = Self {
            break_date,
            found_value: String::new(),
        };
        dates.update_found_value(today);
        dates
    }

    /// Recomputes the days-remaining display string.
    pub fn update_found_value(&mut self, today: NaiveDate) {
        self.found_value = school_days_between(today, self.break_date).to_string();
    }

    /// True once the break date has been reached.
    pub fn is_summer(&self, today: NaiveDate) -> bool {
        today >= self.break_date
    }
}

/// Counts weekdays (Mon-Fri) from `from` inclusive up to `until` exclusive.
///
/// Returns 0 when `from` is on or past `until`.
fn school_days_between(from: NaiveDate, until: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = from;
    while day < until {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        // Never fails for in-range dates; saturate rather than loop forever.
        day = match day.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };
    }
    count
}

/// Resolves the default break date relative to `today`: the next upcoming
/// occurrence of the configured month/day.
pub fn default_break_date(today: NaiveDate, month: u32, day: u32) -> NaiveDate {
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day);
    match this_year {
        Some(date) if date >= today => date,
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day)
            // month/day come from validated constants or CLI parsing.
            .unwrap_or(today),
    }
}
