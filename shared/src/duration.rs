//! Remaining-life formatting
//!
//! Converts a fractional number of remaining years into whole years,
//! months and days, and projects the calendar date they end on.
//!
//! The split uses fixed averages (365.25 days per year, 30.44 days per
//! month) while the end date uses calendar arithmetic: fields are added to
//! the year, month and day-of-month and overflow rolls forward, so
//! January 31 plus one month lands in early March.

use crate::errors::DurationError;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_YEAR: f64 = 365.25;
pub const DAYS_PER_MONTH: f64 = 30.44;

/// Remaining life broken into calendar units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingLife {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub end_date: NaiveDate,
}

impl RemainingLife {
    /// Days represented by the split, using the same averages as the split
    pub fn approximate_days(&self) -> f64 {
        f64::from(self.years) * DAYS_PER_YEAR
            + f64::from(self.months) * DAYS_PER_MONTH
            + f64::from(self.days)
    }
}

/// Split `remaining_years` and project the end date from `today`
///
/// Negative and non-finite inputs are treated as zero.
pub fn format_remaining(remaining_years: f64, today: NaiveDate) -> Result<RemainingLife, DurationError> {
    let remaining_years = if remaining_years.is_finite() {
        remaining_years.max(0.0)
    } else {
        0.0
    };

    let total_days = (remaining_years * DAYS_PER_YEAR).floor();
    let years = (total_days / DAYS_PER_YEAR).floor();
    let remainder = total_days % DAYS_PER_YEAR;
    let months = (remainder / DAYS_PER_MONTH).floor();
    let days = (remainder % DAYS_PER_MONTH).floor();

    let years = to_whole(years)?;
    let months = to_whole(months)?;
    let days = to_whole(days)?;

    let end_date = advance_calendar(today, years, months, days).ok_or(DurationError::OutOfRange)?;

    Ok(RemainingLife {
        years,
        months,
        days,
        end_date,
    })
}

fn to_whole(value: f64) -> Result<u32, DurationError> {
    if value >= 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(DurationError::OutOfRange)
    }
}

/// Add years, months and days to a date, normalizing overflow
///
/// The month is normalized first (month 13 becomes January of the next
/// year), then the day-of-month offset is counted from the first of that
/// month, so an out-of-range day rolls into the following month.
pub fn advance_calendar(today: NaiveDate, years: u32, months: u32, days: u32) -> Option<NaiveDate> {
    let month_index = i64::from(today.month0()) + i64::from(months);
    let year = i64::from(today.year()) + i64::from(years) + month_index.div_euclid(12);
    let month = u32::try_from(month_index.rem_euclid(12)).ok()? + 1;

    let first_of_month = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    let day_offset = u64::from(today.day0()) + u64::from(days);
    first_of_month.checked_add_days(Days::new(day_offset))
}
