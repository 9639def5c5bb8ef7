//! Calendar date used to prefix published posts.
//!
//! `PublishDate` only carries year, month and day. The current value comes
//! from the local system clock (via `chrono`) and is range-checked like any
//! other date; everything else is plain integer arithmetic.
//!
//! # Examples
//!
//! ```ignore
//! let date = PublishDate::from_ymd(2024, 3, 5)?;
//! assert_eq!(date.to_string(), "2024-03-05");
//!
//! let today = PublishDate::today()?;
//! ```

use anyhow::{Result, bail};
use chrono::{Datelike, Local};
use std::fmt;

/// Local calendar date, formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublishDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PublishDate {
    /// Build a date, validating month and day ranges.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Today's date according to the local timezone.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn today() -> Result<Self> {
        let now = Local::now();
        let Ok(year) = u16::try_from(now.year()) else {
            bail!("year is out of range: {}", now.year());
        };
        Self::from_ymd(year, now.month() as u8, now.day() as u8)
    }

    fn validate(self) -> Result<()> {
        let Self { year, month, day } = self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for PublishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_pads() {
        let date = PublishDate::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");

        let date = PublishDate::from_ymd(987, 12, 31).unwrap();
        assert_eq!(date.to_string(), "0987-12-31");
    }

    #[test]
    fn test_validate_ranges() {
        assert!(PublishDate::from_ymd(2024, 0, 1).is_err());
        assert!(PublishDate::from_ymd(2024, 13, 1).is_err());
        assert!(PublishDate::from_ymd(2024, 4, 31).is_err());
        assert!(PublishDate::from_ymd(2024, 1, 0).is_err());
    }

    #[test]
    fn test_leap_years() {
        assert!(PublishDate::from_ymd(2024, 2, 29).is_ok());
        assert!(PublishDate::from_ymd(2023, 2, 29).is_err());
        assert!(PublishDate::from_ymd(2000, 2, 29).is_ok());
        assert!(PublishDate::from_ymd(1900, 2, 29).is_err());
    }

    #[test]
    fn test_today_is_valid() {
        let today = PublishDate::today().unwrap();
        assert!((1..=12).contains(&today.month));
        assert_eq!(today.to_string().len(), 10);
    }
}
