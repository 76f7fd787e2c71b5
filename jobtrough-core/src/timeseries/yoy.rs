use std::collections::HashMap;

use jobtrough_types::{AnnualPoint, MonthStamp, MonthlyPoint, Observation};

/// Fractional change from `prior` to `current`.
///
/// Undefined (`None`) unless both values are present and finite and `prior` is
/// strictly positive.
#[must_use]
pub fn fractional_change(current: Option<f64>, prior: Option<f64>) -> Option<f64> {
    let (c, p) = (current?, prior?);
    if p > 0.0 && p.is_finite() && c.is_finite() {
        Some((c - p) / p)
    } else {
        None
    }
}

/// Compute year-over-year change for an annual series.
///
/// Output is sorted by year. For each point at year `y` the point at `y - 1`
/// is looked up; when it is missing or not positive, `yoy_change` is `None`.
/// Duplicate years keep their first occurrence as the prior-year reference.
#[must_use]
pub fn compute_yoy(series: &[AnnualPoint]) -> Vec<AnnualPoint> {
    let mut by_year: HashMap<i32, Option<f64>> = HashMap::with_capacity(series.len());
    for p in series {
        by_year.entry(p.year).or_insert(p.value);
    }

    let mut out: Vec<AnnualPoint> = series
        .iter()
        .map(|p| {
            let prior = p
                .year
                .checked_sub(1)
                .and_then(|y| by_year.get(&y).copied().flatten());
            AnnualPoint {
                year: p.year,
                value: p.value,
                yoy_change: fractional_change(p.value, prior),
            }
        })
        .collect();
    out.sort_by_key(|p| p.year);
    out
}

/// Compute year-over-year change for a monthly series against the same month one year earlier.
///
/// Output is sorted chronologically; the first twelve months of any run have no
/// reference and carry `None`.
#[must_use]
pub fn compute_monthly_yoy(series: &[Observation]) -> Vec<MonthlyPoint> {
    let mut by_stamp: HashMap<MonthStamp, Option<f64>> = HashMap::with_capacity(series.len());
    for o in series {
        by_stamp.entry(o.stamp).or_insert(o.value);
    }

    let mut out: Vec<MonthlyPoint> = series
        .iter()
        .map(|o| {
            let prior = o
                .stamp
                .add_months(-12)
                .and_then(|s| by_stamp.get(&s).copied().flatten());
            MonthlyPoint {
                stamp: o.stamp,
                value: o.value,
                yoy_change: fractional_change(o.value, prior),
            }
        })
        .collect();
    out.sort_by_key(|p| p.stamp);
    out
}

fn lerp(a: Option<f64>, b: Option<f64>, alpha: f64) -> Option<f64> {
    let (a, b) = (a?, b?);
    Some(a + (b - a) * alpha)
}

/// Expand an annual series to monthly points for display.
///
/// For consecutive years `Y` and `Y + 1`, month `m` of `Y` is the linear
/// interpolation at `alpha = (m - 1) / 12` of both `value` and `yoy_change`.
/// A year with no following year (the last one, or one followed by a gap) is
/// repeated flat for its twelve months.
///
/// The result fabricates monthly granularity from annual anchors for visual
/// smoothness only. It is not a statistical estimate of monthly levels.
#[must_use]
pub fn interpolate_monthly(annual: &[AnnualPoint]) -> Vec<MonthlyPoint> {
    let mut sorted: Vec<&AnnualPoint> = annual.iter().collect();
    sorted.sort_by_key(|p| p.year);
    sorted.dedup_by_key(|p| p.year);

    let mut out: Vec<MonthlyPoint> = Vec::with_capacity(sorted.len() * 12);
    for (i, a) in sorted.iter().enumerate() {
        let next = sorted
            .get(i + 1)
            .filter(|b| a.year.checked_add(1) == Some(b.year));
        for month in 1..=12u32 {
            let Ok(stamp) = MonthStamp::new(a.year, month) else {
                continue;
            };
            let (value, yoy_change) = match next {
                Some(b) => {
                    let alpha = f64::from(month - 1) / 12.0;
                    (
                        lerp(a.value, b.value, alpha),
                        lerp(a.yoy_change, b.yoy_change, alpha),
                    )
                }
                None => (a.value, a.yoy_change),
            };
            out.push(MonthlyPoint {
                stamp,
                value,
                yoy_change,
            });
        }
    }
    out
}
