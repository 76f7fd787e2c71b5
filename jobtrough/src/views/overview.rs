use jobtrough_core::{
    AnnualPoint, MonthStamp, MonthlyPoint, RecessionWindow, compute_yoy, find_trough,
    interpolate_monthly,
};
use serde::{Deserialize, Serialize};

use crate::Snapshot;

/// Jobs lost around a recession: the prior year's level minus the lowest level
/// over the start year and the two following years, floored at zero.
///
/// `None` when the prior year or every year of the span is missing.
#[must_use]
pub fn jobs_lost(annual: &[AnnualPoint], start_year: i32) -> Option<f64> {
    let prior_year = start_year.checked_sub(1)?;
    let span_end = start_year.checked_add(2)?;
    let prior = annual.iter().find(|p| p.year == prior_year)?.value?;
    let span: Vec<&AnnualPoint> = annual
        .iter()
        .filter(|p| (start_year..=span_end).contains(&p.year))
        .collect();
    let low = find_trough(&span)?.value;
    Some((prior - low).max(0.0))
}

/// A shaded recession period on the long-run overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecessionBand {
    /// Window id, e.g. `"2008"`.
    pub id: String,
    /// Display label.
    pub label: String,
    /// First shaded month.
    pub start: MonthStamp,
    /// Last shaded month.
    pub end: MonthStamp,
    /// Start month as a short label, e.g. `"Jan 2008"`.
    pub start_label: String,
    /// First calendar year the band covers for year lookups.
    pub year_start: i32,
    /// Last calendar year the band covers for year lookups.
    pub year_end: i32,
    /// Annual level lost, see [`jobs_lost`].
    pub jobs_lost: Option<f64>,
}

impl RecessionBand {
    fn from_window(window: &RecessionWindow, annual: &[AnnualPoint]) -> Self {
        let year_start = window.start.year();
        Self {
            id: window.id.clone(),
            label: window.label.clone(),
            start: window.start,
            end: window.end,
            start_label: window.start.label(),
            year_start,
            year_end: year_start.saturating_add(2),
            jobs_lost: jobs_lost(annual, year_start),
        }
    }

    /// True if `year` falls within `year_start..=year_end`.
    #[must_use]
    pub fn covers_year(&self, year: i32) -> bool {
        (self.year_start..=self.year_end).contains(&year)
    }
}

/// Long-run view of the annual total series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Annual points with year-over-year change.
    pub annual: Vec<AnnualPoint>,
    /// Monthly points interpolated between annual anchors, for display only.
    pub monthly: Vec<MonthlyPoint>,
    /// Recession bands in catalog order.
    pub bands: Vec<RecessionBand>,
}

impl Overview {
    /// The first band covering `year`, if any.
    #[must_use]
    pub fn band_for_year(&self, year: i32) -> Option<&RecessionBand> {
        self.bands.iter().find(|b| b.covers_year(year))
    }
}

impl Snapshot {
    /// YoY change of the annual total series with its recession bands.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "jobtrough::views::overview", skip(self))
    )]
    #[must_use]
    pub fn overview(&self) -> Overview {
        let annual = compute_yoy(&self.annual);
        let monthly = interpolate_monthly(&annual);
        let bands = self
            .overview_bands()
            .iter()
            .map(|w| RecessionBand::from_window(w, &annual))
            .collect();
        Overview {
            annual,
            monthly,
            bands,
        }
    }
}
