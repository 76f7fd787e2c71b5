use jobtrough_core::{SeriesReport, WindowKind};
use serde::{Deserialize, Serialize};

use super::align::AlignSpec;
use crate::Snapshot;

/// One category across every contraction window, as change from each window's start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractionProfiles {
    /// Category key as requested.
    pub category: String,
    /// One report per contraction window, in catalog order.
    pub profiles: Vec<SeriesReport>,
    /// `(min, max)` over all defined values of all profiles, for a shared y-axis.
    pub y_extent: Option<(f64, f64)>,
}

impl ContractionProfiles {
    /// The profile for a window id, if it carries data.
    #[must_use]
    pub fn profile(&self, window_id: &str) -> Option<&SeriesReport> {
        self.profiles
            .iter()
            .find(|r| r.window_id == window_id && r.has_data())
    }
}

fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

impl Snapshot {
    /// Compare the shape of every contraction for one category.
    ///
    /// Each profile is the fractional change from the window's first month, so
    /// contractions of different absolute size share one axis.
    #[must_use]
    pub fn contraction_profiles(&self, category: &str) -> ContractionProfiles {
        let spec = AlignSpec::change_from_start();
        let profiles: Vec<SeriesReport> = self
            .catalog(WindowKind::Contraction)
            .iter()
            .map(|w| self.align_window(category, w, &spec))
            .collect();
        let y_extent = extent(
            profiles
                .iter()
                .filter_map(|r| r.series.as_ref())
                .flat_map(|s| s.values()),
        );
        ContractionProfiles {
            category: category.to_string(),
            profiles,
            y_extent,
        }
    }
}
