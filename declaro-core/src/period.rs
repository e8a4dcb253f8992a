//! Declaration period: the calendar month being declared.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Days, NaiveDate};

/// A single calendar month, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationPeriod {
    first: NaiveDate,
    last: NaiveDate,
}

impl DeclarationPeriod {
    /// Build a period for `year`/`month`. Month must be 1-12; year is kept
    /// to 2000-2099, which covers anything the operator portals accept.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            bail!("month must be between 1 and 12, got {month}");
        }
        if !(2000..=2099).contains(&year) {
            bail!("year must be between 2000 and 2099, got {year}");
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .with_context(|| format!("invalid period {year}-{month:02}"))?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .with_context(|| format!("month arithmetic failed for {year}-{month:02}"))?;
        let last = next_month
            .checked_sub_days(Days::new(1))
            .context("month has no last day")?;

        Ok(Self { first, last })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First calendar date of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Last calendar date of the month (leap-aware).
    pub fn last_day(&self) -> NaiveDate {
        self.last
    }

    /// Human-readable label, e.g. "February 2026".
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// The "my reference" header value on the expense form.
    pub fn reference(&self) -> String {
        format!("Expenses for {}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_boundaries() {
        let p = DeclarationPeriod::new(2026, 4).unwrap();
        assert_eq!(p.first_day(), NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(p.last_day(), NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
    }

    #[test]
    fn test_leap_february() {
        let p = DeclarationPeriod::new(2024, 2).unwrap();
        assert_eq!(p.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let p = DeclarationPeriod::new(2026, 2).unwrap();
        assert_eq!(p.last_day(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_december_wraps_year() {
        let p = DeclarationPeriod::new(2025, 12).unwrap();
        assert_eq!(p.last_day(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    }

    #[test]
    fn test_rejects_out_of_range_input() {
        assert!(DeclarationPeriod::new(2026, 0).is_err());
        assert!(DeclarationPeriod::new(2026, 13).is_err());
        assert!(DeclarationPeriod::new(1999, 5).is_err());
    }

    #[test]
    fn test_label_and_reference() {
        let p = DeclarationPeriod::new(2026, 2).unwrap();
        assert_eq!(p.label(), "February 2026");
        assert_eq!(p.reference(), "Expenses for February 2026");
    }
}
