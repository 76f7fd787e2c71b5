use jobtrough_types::{
    AlignedPoint, AlignedSeries, Dated, MonthStamp, RecessionWindow, Scale, Valued,
};

/// Keep the points whose month lies in `[window.start, window.end]`, sorted
/// chronologically.
///
/// An empty result means "no data" for this window and is not an error.
/// Sorting is stable: points sharing a month keep their input order.
#[must_use]
pub fn slice_to_window<P>(series: &[P], window: &RecessionWindow) -> Vec<P>
where
    P: Dated + Clone,
{
    let mut out: Vec<P> = series
        .iter()
        .filter(|p| window.contains(p.stamp()))
        .cloned()
        .collect();
    out.sort_by_key(Dated::stamp);
    out
}

/// Re-base the time axis of a windowed series to months since `start`.
///
/// `months_since_start = (year - start.year) * 12 + (month - start.month)`.
/// Points dated before `start` cannot occur for a series produced by
/// [`slice_to_window`] and are dropped if present.
#[must_use]
pub fn reindex_to_event_time<P: Dated>(windowed: &[P], start: MonthStamp) -> AlignedSeries {
    reindex_by(windowed, start, Scale::Level, Valued::value)
}

/// Like [`reindex_to_event_time`] but reading the plotted value through `value_of`.
///
/// Used to align a derived field (e.g. year-over-year change) instead of the level.
pub fn reindex_by<P, F>(windowed: &[P], start: MonthStamp, scale: Scale, value_of: F) -> AlignedSeries
where
    P: Dated,
    F: Fn(&P) -> Option<f64>,
{
    let points = windowed
        .iter()
        .filter_map(|p| {
            let months = u32::try_from(p.stamp().months_since(start)).ok()?;
            Some(AlignedPoint {
                months_since_start: months,
                value: value_of(p),
            })
        })
        .collect();
    AlignedSeries {
        start: Some(start),
        scale,
        points,
    }
}

/// Drop points further than `horizon_months` from the start.
#[must_use]
pub fn truncate_to_horizon(series: &AlignedSeries, horizon_months: u32) -> AlignedSeries {
    AlignedSeries {
        start: series.start,
        scale: series.scale,
        points: series
            .points
            .iter()
            .copied()
            .filter(|p| p.months_since_start <= horizon_months)
            .collect(),
    }
}

/// Drop points whose value is undefined.
#[must_use]
pub fn drop_gaps(series: &AlignedSeries) -> AlignedSeries {
    AlignedSeries {
        start: series.start,
        scale: series.scale,
        points: series
            .points
            .iter()
            .copied()
            .filter(|p| p.value.is_some_and(f64::is_finite))
            .collect(),
    }
}
