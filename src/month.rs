//! Helpers for working with calendar months.
//!
//! Budgets and monthly report buckets are keyed by a year-month string such
//! as "2024-03". Internally a month is represented as a [Date] pinned to the
//! first day of that month.

use time::{Date, Month};

use crate::Error;

/// Parse a year-month string such as "2024-03" into the first day of that month.
///
/// # Errors
/// Returns [Error::InvalidField] if `value` is not a calendar month in
/// YYYY-MM format.
pub fn parse_month(value: &str) -> Result<Date, Error> {
    let invalid = || Error::InvalidField {
        field: "month",
        message: format!("\"{value}\" is not a calendar month in YYYY-MM format"),
    };

    let (year, month) = value.split_once('-').ok_or_else(invalid)?;

    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u8 = month.parse().map_err(|_| invalid())?;
    let month = Month::try_from(month).map_err(|_| invalid())?;

    Date::from_calendar_date(year, month, 1).map_err(|_| invalid())
}

/// Format a date's month as a year-month key, e.g. "2024-03".
pub fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), date.month() as u8)
}

/// Format a date's month for display, e.g. "Mar 24".
pub fn month_label(date: Date) -> String {
    let month = match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{month} {:02}", date.year().rem_euclid(100))
}

/// The first day of the month that `date` falls in.
pub fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap()
}

/// The first day of the month `months` whole months before the month that
/// `date` falls in.
pub fn months_back(date: Date, months: u32) -> Date {
    let mut year = date.year();
    let mut month = date.month() as i32 - months as i32;

    while month < 1 {
        month += 12;
        year -= 1;
    }

    Date::from_calendar_date(year, Month::try_from(month as u8).unwrap(), 1).unwrap()
}

/// The first day of the month after the month that `date` falls in.
pub fn next_month(date: Date) -> Date {
    let (year, month) = match date.month() {
        Month::December => (date.year() + 1, Month::January),
        month => (date.year(), month.next()),
    };

    Date::from_calendar_date(year, month, 1).unwrap()
}

/// The last day of the month that `date` falls in.
pub fn month_end(date: Date) -> Date {
    date.replace_day(date.month().length(date.year())).unwrap()
}
