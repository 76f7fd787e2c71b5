use jobtrough_core::{AlignedSeries, MonthStamp, SeriesReport, WindowKind, find_trough};
use serde::{Deserialize, Serialize};

use super::align::AlignSpec;
use crate::Snapshot;

/// Where an indexed shock path stands after the horizon and how deep it fell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    /// Index at the horizon month (or the last point, if shorter) minus 100.
    pub delta_at_horizon: Option<f64>,
    /// Calendar month of the lowest index.
    pub trough: MonthStamp,
    /// Trough month as a short label, e.g. `"Jun 2009"`.
    pub trough_label: String,
    /// Months after the window start at which the trough occurred.
    pub trough_months_since_start: u32,
    /// Lowest index minus 100 (negative for a loss).
    pub trough_change: f64,
}

/// Compute landing metrics for an index-100 series.
///
/// Returns `None` if the series has no defined value or no calendar anchor.
#[must_use]
pub fn landing_metrics(index: &AlignedSeries, horizon_months: u32) -> Option<Landing> {
    let trough = find_trough(&index.points)?;
    let trough_stamp = index.stamp_of(trough.point)?;
    let last = index.len().checked_sub(1)?;
    let at = usize::try_from(horizon_months).map_or(last, |h| h.min(last));
    Some(Landing {
        delta_at_horizon: index.points[at].value.map(|v| v - 100.0),
        trough: trough_stamp,
        trough_label: trough_stamp.label(),
        trough_months_since_start: trough.point.months_since_start,
        trough_change: trough.value - 100.0,
    })
}

/// One shock window's indexed path with its landing metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockPath {
    /// Window label, e.g. `"2008 Great Recession"`.
    pub label: String,
    /// Aligned, smoothed, truncated and rebased series.
    pub report: SeriesReport,
    /// `None` when the path carries no data.
    pub landing: Option<Landing>,
}

/// Indexed shock paths of one category across all shock windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShockReport {
    /// Category key as requested.
    pub category: String,
    /// Horizon the paths were truncated to.
    pub horizon_months: u32,
    /// One path per shock window, in catalog order.
    pub paths: Vec<ShockPath>,
}

impl Snapshot {
    /// Indexed paths of one category through every shock window.
    ///
    /// Each path is sliced, re-indexed, smoothed with the configured mode,
    /// truncated to the configured horizon, then rebased to 100 at its first month.
    #[must_use]
    pub fn shock_paths(&self, category: &str) -> ShockReport {
        let horizon = self.cfg.shock_horizon_months;
        let spec = AlignSpec::index100()
            .with_smoothing(self.cfg.shock_smoothing)
            .with_horizon(horizon);
        let paths = self
            .catalog(WindowKind::Shock)
            .iter()
            .map(|w| {
                let report = self.align_window(category, w, &spec);
                let landing = report
                    .series
                    .as_ref()
                    .and_then(|s| landing_metrics(s, horizon));
                ShockPath {
                    label: w.label.clone(),
                    report,
                    landing,
                }
            })
            .collect();
        ShockReport {
            category: category.to_string(),
            horizon_months: horizon,
            paths,
        }
    }
}
