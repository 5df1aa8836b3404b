// File: crates/gantt-core/src/month.rs
// Summary: Year-month value type and the calendar arithmetic the planner needs.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::error::GanttError;

/// Years outside this window are rejected so derived dates stay inside chrono's range.
const YEAR_LIMIT: i32 = 100_000;

/// A calendar month without a day component.
/// Contract: always refers to a representable month; `first_day` never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Build from a year and 1-based month; `None` when out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if year.abs() > YEAR_LIMIT {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self { first: date.with_day(1).unwrap_or(date) }
    }

    /// Parse `YYYY-MM`, `YYYY/MM` or a full `YYYY-MM-DD` (truncated to its month).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self::from_date(d));
        }
        let (y, m) = s.split_once(|c| c == '-' || c == '/')?;
        if y.len() != 4 || !y.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if m.is_empty() || m.len() > 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(y.parse().ok()?, m.parse().ok()?)
    }

    pub fn year(&self) -> i32 { self.first.year() }
    pub fn month(&self) -> u32 { self.first.month() }

    /// Shift by `n` months (negative goes back); `None` past the supported range.
    pub fn checked_add_months(self, n: i64) -> Option<Self> {
        let months = Months::new(u32::try_from(n.unsigned_abs()).ok()?);
        let first = if n >= 0 {
            self.first.checked_add_months(months)?
        } else {
            self.first.checked_sub_months(months)?
        };
        (first.year().abs() <= YEAR_LIMIT).then_some(Self { first })
    }

    /// The following month.
    pub fn succ(self) -> Option<Self> { self.checked_add_months(1) }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(self, other: YearMonth) -> i64 {
        let years = i64::from(other.year()) - i64::from(self.year());
        years * 12 + i64::from(other.month()) - i64::from(self.month())
    }

    pub fn days_in_month(&self) -> u32 {
        // The next month always exists inside YEAR_LIMIT.
        self.first
            .checked_add_months(Months::new(1))
            .map_or(31, |next| (next - self.first).num_days() as u32)
    }

    pub fn first_day(&self) -> NaiveDate { self.first }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Duration::days(i64::from(self.days_in_month()) - 1)
    }

    /// Day at `frac` of the way through the month (0.0 = first day, 0.5 = midpoint).
    pub fn at_fraction(&self, frac: f64) -> NaiveDate {
        let days = self.days_in_month();
        let offset = (f64::from(days) * frac.clamp(0.0, 1.0)).floor() as u32;
        self.first + Duration::days(i64::from(offset.min(days - 1)))
    }

    /// January of the same year.
    pub fn floor_year(&self) -> Self {
        Self { first: self.first.with_month(1).unwrap_or(self.first) }
    }

    /// January of the next year, unless already January.
    pub fn ceil_year(&self) -> Option<Self> {
        if self.month() == 1 {
            Some(*self)
        } else {
            self.floor_year().checked_add_months(12)
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = GanttError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| GanttError::InvalidConfig(format!("'{s}' is not a year-month")))
    }
}
