//! Shared helpers for grouping and ordering observation series.

use std::collections::BTreeMap;

use jobtrough_types::{Dated, Observation};

/// Group observations by category, each group sorted chronologically with
/// one observation per month.
///
/// Sorting is stable, so when a month repeats the observation that came first
/// in the input is kept. Callers that need to report duplicates should go
/// through [`normalize_monthly`](crate::rows::normalize_monthly), which drops
/// them with a warning before grouping.
#[must_use]
pub fn group_by_category<I>(observations: I) -> BTreeMap<String, Vec<Observation>>
where
    I: IntoIterator<Item = Observation>,
{
    let mut groups: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
    for o in observations {
        groups.entry(o.category.clone()).or_default().push(o);
    }
    for series in groups.values_mut() {
        series.sort_by_key(|o| o.stamp);
        series.dedup_by_key(|o| o.stamp);
    }
    groups
}

/// True if months are strictly increasing.
#[must_use]
pub fn is_strictly_chronological<P: Dated>(series: &[P]) -> bool {
    series.windows(2).all(|w| w[0].stamp() < w[1].stamp())
}
