use jobtrough_core::{
    AlignedSeries, JobtroughError, MonthlyPoint, RecessionWindow, Scale, SeriesReport, Smoothing,
    WindowKind, change_from_start, compute_monthly_yoy, drop_gaps, rebase_to_index100, reindex_by,
    reindex_to_event_time, slice_to_window, smooth, truncate_to_horizon,
};

use crate::Snapshot;

/// Parameters of one run of the alignment pipeline.
///
/// The pipeline is always slice → re-index → smooth → truncate → rescale; the
/// fields choose what each stage does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignSpec {
    /// Output scale. `YoyChange` aligns the monthly YoY change instead of the level.
    pub scale: Scale,
    /// Smoothing applied after re-indexing.
    pub smoothing: Smoothing,
    /// Keep only points up to this many months after the window start.
    pub horizon_months: Option<u32>,
}

impl Default for AlignSpec {
    fn default() -> Self {
        Self::level()
    }
}

impl AlignSpec {
    /// Raw levels on the event-time axis.
    #[must_use]
    pub const fn level() -> Self {
        Self {
            scale: Scale::Level,
            smoothing: Smoothing::None,
            horizon_months: None,
        }
    }

    /// Rebased so the first point equals 100.
    #[must_use]
    pub const fn index100() -> Self {
        Self {
            scale: Scale::Index100,
            ..Self::level()
        }
    }

    /// Fractional change from the first point.
    #[must_use]
    pub const fn change_from_start() -> Self {
        Self {
            scale: Scale::ChangeFromStart,
            ..Self::level()
        }
    }

    /// Monthly year-over-year change, gaps dropped.
    #[must_use]
    pub const fn yoy_change() -> Self {
        Self {
            scale: Scale::YoyChange,
            ..Self::level()
        }
    }

    /// Apply `mode` before rescaling.
    #[must_use]
    pub const fn with_smoothing(mut self, mode: Smoothing) -> Self {
        self.smoothing = mode;
        self
    }

    /// Truncate to `months` after the window start before rescaling.
    #[must_use]
    pub const fn with_horizon(mut self, months: u32) -> Self {
        self.horizon_months = Some(months);
        self
    }
}

fn degrade(report: &mut SeriesReport, err: JobtroughError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(
        category = %report.category,
        window = %report.window_id,
        error = %err,
        "series degraded to no data"
    );
    report.warnings.push(err);
}

impl Snapshot {
    /// Align one category to one catalog window.
    ///
    /// Behavior and trade-offs:
    /// - Local problems (unknown category, no overlapping data, unusable
    ///   baseline) never fail the call; the report then carries no series and
    ///   the reason as a warning.
    /// - Re-running with the same arguments yields bit-identical output.
    ///
    /// # Errors
    /// Returns `UnknownWindow` if `window_id` is not in the catalog of `kind`.
    pub fn align(
        &self,
        category: &str,
        kind: WindowKind,
        window_id: &str,
        spec: &AlignSpec,
    ) -> Result<SeriesReport, JobtroughError> {
        let window = self.catalog(kind).require(window_id)?;
        Ok(self.align_window(category, window, spec))
    }

    /// Align one category to an arbitrary window.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "jobtrough::views::align_window",
            skip(self, window, spec),
            fields(window = %window.id, kind = %window.kind, scale = ?spec.scale),
        )
    )]
    #[must_use]
    pub fn align_window(
        &self,
        category: &str,
        window: &RecessionWindow,
        spec: &AlignSpec,
    ) -> SeriesReport {
        let mut report = SeriesReport {
            category: category.to_string(),
            kind: window.kind,
            window_id: window.id.clone(),
            series: None,
            warnings: Vec::new(),
        };

        let observations = match self.series(category) {
            Ok(s) => s,
            Err(e) => {
                degrade(&mut report, e);
                return report;
            }
        };

        let aligned = if spec.scale == Scale::YoyChange {
            let yoy = compute_monthly_yoy(observations);
            let windowed = slice_to_window(&yoy, window);
            drop_gaps(&reindex_by(
                &windowed,
                window.start,
                Scale::YoyChange,
                |p: &MonthlyPoint| p.yoy_change,
            ))
        } else {
            reindex_to_event_time(&slice_to_window(observations, window), window.start)
        };
        let smoothed = smooth(&aligned, spec.smoothing);
        let truncated = match spec.horizon_months {
            Some(h) => truncate_to_horizon(&smoothed, h),
            None => smoothed,
        };
        // Checked after truncation: a horizon can end before the first surviving point.
        if truncated.is_empty() {
            degrade(
                &mut report,
                JobtroughError::empty_window(category, &window.id),
            );
            return report;
        }
        match rescale(&truncated, spec.scale) {
            Ok(series) => report.series = Some(series),
            Err(e) => degrade(&mut report, e),
        }
        report
    }
}

fn rescale(series: &AlignedSeries, scale: Scale) -> Result<AlignedSeries, JobtroughError> {
    match scale {
        Scale::Index100 => rebase_to_index100(series),
        Scale::ChangeFromStart => change_from_start(series),
        _ => Ok(series.clone()),
    }
}
