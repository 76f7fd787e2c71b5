//! Report envelopes produced by the loader and the alignment pipeline.

use serde::{Deserialize, Serialize};

use crate::error::JobtroughError;
use crate::series::AlignedSeries;
use crate::window::WindowKind;

/// Result of aligning one category to one window.
///
/// `series` is `None` when the series degraded to "no data"; `warnings` then
/// holds the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Category key as requested.
    pub category: String,
    /// Catalog the window was taken from.
    pub kind: WindowKind,
    /// Window id.
    pub window_id: String,
    /// Aligned series, if any data survived the pipeline.
    pub series: Option<AlignedSeries>,
    /// Non-fatal issues encountered while building the series.
    pub warnings: Vec<JobtroughError>,
}

impl SeriesReport {
    /// True if the report carries a non-empty series.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.series.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// Summary of the one-shot load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadReport {
    /// Monthly rows accepted into the snapshot.
    pub monthly_rows: usize,
    /// Monthly rows skipped by the row filter.
    pub filtered_rows: usize,
    /// Annual rows accepted into the snapshot.
    pub annual_rows: usize,
    /// Distinct categories in the snapshot.
    pub categories: usize,
    /// Non-fatal issues (malformed rows, unmatched aliases).
    pub warnings: Vec<JobtroughError>,
}
