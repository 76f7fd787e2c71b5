use jobtrough_types::{AlignedPoint, AlignedSeries, JobtroughError, Scale, Smoothing};

fn usable_baseline(series: &AlignedSeries) -> Result<f64, JobtroughError> {
    let first = series
        .points
        .first()
        .ok_or_else(|| JobtroughError::invalid_baseline("series is empty"))?;
    let base = first
        .value
        .ok_or_else(|| JobtroughError::invalid_baseline("first value is missing"))?;
    if !base.is_finite() {
        return Err(JobtroughError::invalid_baseline(format!(
            "first value is not finite: {base}"
        )));
    }
    if base.abs() <= f64::EPSILON {
        return Err(JobtroughError::invalid_baseline("first value is zero"));
    }
    Ok(base)
}

fn map_values<F>(series: &AlignedSeries, scale: Scale, f: F) -> AlignedSeries
where
    F: Fn(f64) -> f64,
{
    AlignedSeries {
        start: series.start,
        scale,
        points: series
            .points
            .iter()
            .map(|p| AlignedPoint {
                months_since_start: p.months_since_start,
                value: p.value.map(&f),
            })
            .collect(),
    }
}

/// Rescale a series so its first point equals 100: `value / first * 100`.
///
/// # Errors
/// Returns `InvalidBaseline` if the series is empty or its first value is
/// missing, zero, or non-finite. No partial output is produced.
pub fn rebase_to_index100(series: &AlignedSeries) -> Result<AlignedSeries, JobtroughError> {
    let base = usable_baseline(series)?;
    Ok(map_values(series, Scale::Index100, |v| v / base * 100.0))
}

/// Express every point as a fractional change from the first: `(value - first) / first`.
///
/// # Errors
/// Same baseline requirements as [`rebase_to_index100`].
pub fn change_from_start(series: &AlignedSeries) -> Result<AlignedSeries, JobtroughError> {
    let base = usable_baseline(series)?;
    Ok(map_values(series, Scale::ChangeFromStart, |v| (v - base) / base))
}

/// Causal two-point moving average.
///
/// Each output is the mean of the current and immediately preceding value; the
/// first point (or a point following a gap) is kept as is. Gaps stay gaps.
/// No later point influences an earlier one.
#[must_use]
pub fn smooth_trailing_pair(series: &AlignedSeries) -> AlignedSeries {
    let mut prev: Option<f64> = None;
    let points = series
        .points
        .iter()
        .map(|p| {
            let value = p.value.map(|v| prev.map_or(v, |pv| (pv + v) / 2.0));
            prev = p.value;
            AlignedPoint {
                months_since_start: p.months_since_start,
                value,
            }
        })
        .collect();
    AlignedSeries {
        start: series.start,
        scale: series.scale,
        points,
    }
}

/// Apply a configured [`Smoothing`] mode.
#[must_use]
pub fn smooth(series: &AlignedSeries, mode: Smoothing) -> AlignedSeries {
    match mode {
        Smoothing::TrailingPair => smooth_trailing_pair(series),
        _ => series.clone(),
    }
}
