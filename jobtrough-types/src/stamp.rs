//! Calendar month identifiers and the decimal-year time index.

use core::fmt;
use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::JobtroughError;

/// A calendar month (`year`, `month` in 1..=12).
///
/// Ordering is chronological. Serialized as `"YYYY-MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthStamp {
    year: i32,
    month: u8,
}

impl MonthStamp {
    /// Build a month stamp.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `month` is outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, JobtroughError> {
        if !(1..=12).contains(&month) {
            return Err(JobtroughError::InvalidArg(format!(
                "month must be in 1..=12, got {month}"
            )));
        }
        let month = u8::try_from(month)
            .map_err(|_| JobtroughError::InvalidArg(format!("month out of range: {month}")))?;
        Ok(Self { year, month })
    }

    /// Literal constructor for built-in catalogs. `month` must already be in 1..=12.
    pub(crate) const fn ym(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Calendar month, 1..=12.
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month as u32
    }

    /// Decimal-year time index: `year + (month - 1) / 12`.
    #[must_use]
    pub fn decimal_time(self) -> f64 {
        f64::from(self.year) + f64::from(self.month - 1) / 12.0
    }

    /// Months elapsed since year 0, January. Strictly increasing with chronology.
    #[must_use]
    pub const fn ordinal(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    /// Inverse of [`ordinal`](Self::ordinal). Returns `None` if the year overflows `i32`.
    #[must_use]
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        let month = u8::try_from(ordinal.rem_euclid(12) + 1).ok()?;
        Some(Self { year, month })
    }

    /// Signed number of months from `start` to `self`.
    #[must_use]
    pub const fn months_since(self, start: Self) -> i64 {
        self.ordinal() - start.ordinal()
    }

    /// Shift by a signed number of months.
    #[must_use]
    pub fn add_months(self, months: i64) -> Option<Self> {
        Self::from_ordinal(self.ordinal().checked_add(months)?)
    }

    /// Short human label such as `"Jun 2009"`.
    #[must_use]
    pub fn label(self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1)
            .map_or_else(|| self.to_string(), |d| d.format("%b %Y").to_string())
    }
}

/// Decimal-year time index for a raw `(year, month)` pair.
///
/// Returns `None` when `month` is outside 1..=12.
#[must_use]
pub fn to_decimal_time(year: i32, month: u32) -> Option<f64> {
    MonthStamp::new(year, month).ok().map(MonthStamp::decimal_time)
}

impl fmt::Display for MonthStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthStamp {
    type Err = JobtroughError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || JobtroughError::InvalidArg(format!("expected YYYY-MM, got {s:?}"));
        let (y, m) = s.trim().rsplit_once('-').ok_or_else(bad)?;
        let year: i32 = y.parse().map_err(|_| bad())?;
        let month: u32 = m.parse().map_err(|_| bad())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthStamp {
    type Error = JobtroughError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthStamp> for String {
    fn from(m: MonthStamp) -> Self {
        m.to_string()
    }
}
