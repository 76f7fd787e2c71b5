use std::fmt;

use jobtrough_core::{AlignedSeries, JobtroughError, SeriesReport, WindowKind};
use serde::{Deserialize, Serialize};

use super::align::AlignSpec;
use crate::Snapshot;

/// Change in YoY growth (as a fraction) beyond which a recovery counts as moving.
pub const NARRATIVE_THRESHOLD: f64 = 0.005;

/// Overall movement of YoY growth across a recovery window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Growth rose by more than the threshold.
    Strengthened,
    /// Growth fell by more than the threshold.
    Weakened,
    /// Growth moved by at most the threshold.
    Stable,
}

impl Direction {
    /// Classify a first-to-last change in YoY growth.
    #[must_use]
    pub fn classify(delta: f64) -> Self {
        if delta > NARRATIVE_THRESHOLD {
            Self::Strengthened
        } else if delta < -NARRATIVE_THRESHOLD {
            Self::Weakened
        } else {
            Self::Stable
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strengthened => "strengthened",
            Self::Weakened => "weakened",
            Self::Stable => "stayed relatively stable",
        })
    }
}

/// First and last YoY readings of a recovery and what happened in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    /// Movement classification.
    pub direction: Direction,
    /// Label of the first defined month, e.g. `"Jun 2009"`.
    pub first_label: String,
    /// YoY change at the first defined month, as a fraction.
    pub first_value: f64,
    /// Label of the last defined month.
    pub last_label: String,
    /// YoY change at the last defined month, as a fraction.
    pub last_value: f64,
}

impl Narrative {
    /// One-paragraph summary for a category display name.
    #[must_use]
    pub fn summary(&self, industry_label: &str) -> String {
        format!(
            "In {industry_label}, employment {} over this recovery period. \
             Between {} and {}, year-over-year job growth moved from {:.1}% to {:.1}%.",
            self.direction,
            self.first_label,
            self.last_label,
            self.first_value * 100.0,
            self.last_value * 100.0,
        )
    }
}

/// Summarize a YoY series aligned to a recovery window.
///
/// Returns `None` for an empty series or one without a calendar anchor.
#[must_use]
pub fn narrate(yoy: &AlignedSeries) -> Option<Narrative> {
    let mut defined = yoy.points.iter().filter(|p| p.value.is_some());
    let first = defined.next()?;
    let last = defined.last().unwrap_or(first);
    let (first_value, last_value) = (first.value?, last.value?);
    Some(Narrative {
        direction: Direction::classify(last_value - first_value),
        first_label: yoy.stamp_of(first)?.label(),
        first_value,
        last_label: yoy.stamp_of(last)?.label(),
        last_value,
    })
}

/// YoY growth of one category through one recovery window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryStory {
    /// Window label, e.g. `"Great Recession Recovery"`.
    pub label: String,
    /// YoY series on the months-since-recovery-start axis.
    pub report: SeriesReport,
    /// `None` when the series carries no data.
    pub narrative: Option<Narrative>,
}

impl Snapshot {
    /// Monthly YoY growth of a category through a recovery window, with a summary.
    ///
    /// Months without a defined YoY change are dropped from the series.
    ///
    /// # Errors
    /// Returns `UnknownWindow` if `window_id` is not a recovery window.
    pub fn recovery_story(
        &self,
        category: &str,
        window_id: &str,
    ) -> Result<RecoveryStory, JobtroughError> {
        let window = self.catalog(WindowKind::Recovery).require(window_id)?;
        let report = self.align_window(category, window, &AlignSpec::yoy_change());
        let narrative = report.series.as_ref().and_then(narrate);
        Ok(RecoveryStory {
            label: window.label.clone(),
            report,
            narrative,
        })
    }
}
