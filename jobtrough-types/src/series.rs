//! Point types flowing through the alignment pipeline.

use serde::{Deserialize, Serialize};

use crate::stamp::MonthStamp;

/// Anything carrying an optional numeric value.
///
/// `None` marks a missing or undefined value; it is never read as zero.
pub trait Valued {
    /// The point's value, if defined.
    fn value(&self) -> Option<f64>;
}

/// A valued point anchored to a calendar month.
pub trait Dated: Valued {
    /// Calendar month of the point.
    fn stamp(&self) -> MonthStamp;
}

/// One raw monthly data point for a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Industry/supersector key the row belongs to.
    pub category: String,
    /// Calendar month of the observation.
    pub stamp: MonthStamp,
    /// Level (e.g. thousands of jobs); `None` when absent or unparseable.
    pub value: Option<f64>,
}

/// One annual data point, optionally carrying its year-over-year change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualPoint {
    /// Calendar year.
    pub year: i32,
    /// Annual level; `None` when absent.
    pub value: Option<f64>,
    /// Fractional change from the prior year; `None` when undefined.
    pub yoy_change: Option<f64>,
}

impl AnnualPoint {
    /// Build an annual point with no YoY change yet.
    #[must_use]
    pub const fn new(year: i32, value: f64) -> Self {
        Self {
            year,
            value: Some(value),
            yoy_change: None,
        }
    }
}

/// A monthly point with level and year-over-year change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    /// Calendar month.
    pub stamp: MonthStamp,
    /// Level; `None` when absent.
    pub value: Option<f64>,
    /// Fractional change from twelve months earlier; `None` when undefined.
    pub yoy_change: Option<f64>,
}

/// A point on the event-time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// Months elapsed since the window start (0 at the start month).
    pub months_since_start: u32,
    /// Level, index or change depending on the pipeline stage; `None` is a gap.
    pub value: Option<f64>,
}

/// How the values of an [`AlignedSeries`] should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Scale {
    /// Raw levels as observed.
    #[default]
    Level,
    /// Rebased so the first point equals 100.
    Index100,
    /// Fractional year-over-year change.
    YoyChange,
    /// Fractional change relative to the first point (0.0 at the start).
    ChangeFromStart,
}

/// An ordered event-time series produced by slicing a window and re-basing its time axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignedSeries {
    /// Window start the axis is measured from.
    pub start: Option<MonthStamp>,
    /// Value interpretation.
    pub scale: Scale,
    /// Points in ascending `months_since_start`.
    pub points: Vec<AlignedPoint>,
}

impl AlignedSeries {
    /// Number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no points ("no data").
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Defined values in order, skipping gaps.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|p| p.value)
    }

    /// Calendar month of a point, recovered from the series start.
    #[must_use]
    pub fn stamp_of(&self, point: &AlignedPoint) -> Option<MonthStamp> {
        self.start?.add_months(i64::from(point.months_since_start))
    }
}

impl<T: Valued + ?Sized> Valued for &T {
    fn value(&self) -> Option<f64> {
        (**self).value()
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn stamp(&self) -> MonthStamp {
        (**self).stamp()
    }
}

impl Valued for Observation {
    fn value(&self) -> Option<f64> {
        self.value
    }
}

impl Dated for Observation {
    fn stamp(&self) -> MonthStamp {
        self.stamp
    }
}

impl Valued for MonthlyPoint {
    fn value(&self) -> Option<f64> {
        self.value
    }
}

impl Dated for MonthlyPoint {
    fn stamp(&self) -> MonthStamp {
        self.stamp
    }
}

impl Valued for AlignedPoint {
    fn value(&self) -> Option<f64> {
        self.value
    }
}

impl Valued for AnnualPoint {
    fn value(&self) -> Option<f64> {
        self.value
    }
}
