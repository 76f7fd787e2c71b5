//! Normalization of raw string records into typed observations.
//!
//! The records mirror the columns of the BLS-derived CSV/TSV extracts; any
//! loader that yields these structs (via serde or by hand) can feed a snapshot.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use jobtrough_types::{
    AnnualPoint, CategoryField, JobtroughError, MonthStamp, Observation, RowFilter,
};
use serde::{Deserialize, Serialize};

/// One monthly row as delivered by an external loader. All fields are raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMonthlyRow {
    /// CES series id, possibly padded with whitespace.
    #[serde(default)]
    pub series_id: Option<String>,
    /// Two-digit supersector code.
    #[serde(default)]
    pub supersector_code: Option<String>,
    /// Industry or supersector display name.
    #[serde(default, alias = "supersector_name")]
    pub industry: Option<String>,
    /// Calendar year.
    pub year: String,
    /// BLS period such as `"M03"`; used when `month` is absent.
    #[serde(default)]
    pub period: Option<String>,
    /// Month number `1..=12`.
    #[serde(default, alias = "month_num")]
    pub month: Option<String>,
    /// Level; blank when not published.
    #[serde(default)]
    pub value: String,
    /// CES data type code (`"01"` = all employees).
    #[serde(default)]
    pub data_type_code: Option<String>,
    /// Seasonal adjustment flag (`"S"` or `"U"`).
    #[serde(default)]
    pub seasonal: Option<String>,
}

/// One annual summary row. `yoy_change` is blank for years without a prior year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnnualRow {
    /// Calendar year.
    pub year: String,
    /// Annual level.
    #[serde(default)]
    pub value: String,
    /// Pre-computed change as published by the source, if any.
    #[serde(default)]
    pub yoy_change: String,
}

/// Outcome of normalizing a batch of monthly rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedRows {
    /// Accepted observations in input order.
    pub observations: Vec<Observation>,
    /// Rows rejected by the [`RowFilter`].
    pub filtered: usize,
    /// `MalformedRow` warnings for rows that were dropped or kept with a missing value.
    pub warnings: Vec<JobtroughError>,
}

/// Parse a BLS monthly period (`"M01"`..`"M12"`).
///
/// `"M13"` (annual average) and anything else yields `None`.
#[must_use]
pub fn parse_period(period: &str) -> Option<u32> {
    let digits = period.trim().strip_prefix(['M', 'm'])?;
    let month: u32 = digits.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// Parse a numeric cell. Blank, non-numeric, and non-finite cells are `None`.
#[must_use]
pub fn parse_value(cell: &str) -> Option<f64> {
    let v: f64 = cell.trim().replace(',', "").parse().ok()?;
    v.is_finite().then_some(v)
}

fn non_blank(cell: Option<&String>) -> Option<&str> {
    cell.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn passes(filter: &RowFilter, row: &RawMonthlyRow) -> bool {
    let check = |want: Option<&String>, have: Option<&String>| match (want, non_blank(have)) {
        (Some(w), Some(h)) => w.trim().eq_ignore_ascii_case(h),
        _ => true,
    };
    check(filter.seasonal.as_ref(), row.seasonal.as_ref())
        && check(filter.data_type_code.as_ref(), row.data_type_code.as_ref())
}

fn category_of(row: &RawMonthlyRow, field: CategoryField) -> Option<String> {
    let cell = match field {
        CategoryField::SeriesId => row.series_id.as_ref(),
        CategoryField::SupersectorCode => row.supersector_code.as_ref(),
        _ => row.industry.as_ref(),
    };
    non_blank(cell).map(str::to_string)
}

fn month_of(row: &RawMonthlyRow) -> Result<u32, String> {
    if let Some(m) = non_blank(row.month.as_ref()) {
        return m
            .parse::<u32>()
            .map_err(|_| format!("month is not numeric: {m:?}"));
    }
    let period = non_blank(row.period.as_ref()).ok_or("no month or period column")?;
    parse_period(period).ok_or_else(|| format!("period is not a monthly period: {period:?}"))
}

fn normalize_one(
    line: usize,
    row: &RawMonthlyRow,
    field: CategoryField,
    warnings: &mut Vec<JobtroughError>,
) -> Option<Observation> {
    let malformed = |reason: String| JobtroughError::malformed_row(line, reason);

    let Some(category) = category_of(row, field) else {
        warnings.push(malformed(format!("missing {field:?} column")));
        return None;
    };
    let year: i32 = match row.year.trim().parse() {
        Ok(y) => y,
        Err(_) => {
            warnings.push(malformed(format!("year is not numeric: {:?}", row.year)));
            return None;
        }
    };
    let stamp = match month_of(row)
        .and_then(|m| MonthStamp::new(year, m).map_err(|e| e.to_string()))
    {
        Ok(s) => s,
        Err(reason) => {
            warnings.push(malformed(reason));
            return None;
        }
    };
    let value = parse_value(&row.value);
    if value.is_none() && !row.value.trim().is_empty() {
        warnings.push(malformed(format!("value is not numeric: {:?}", row.value)));
    }
    Some(Observation {
        category,
        stamp,
        value,
    })
}

/// Normalize monthly rows into observations.
///
/// Rows failing the filter are counted, not warned about. Rows whose category,
/// year or month cannot be read are dropped with a `MalformedRow` warning. A
/// non-numeric value keeps the row with a missing value and a warning. Line
/// numbers are 1-based positions in `rows`.
///
/// At most one observation is kept per category and month: the first row wins
/// and every later row for the same month is dropped with a `MalformedRow`
/// warning naming the line it collided with.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "jobtrough_core::rows::normalize_monthly",
        skip(rows, filter),
        fields(rows = rows.len()),
    )
)]
#[must_use]
pub fn normalize_monthly(
    rows: &[RawMonthlyRow],
    field: CategoryField,
    filter: &RowFilter,
) -> NormalizedRows {
    let mut out = NormalizedRows::default();
    let mut first_seen: HashMap<(String, MonthStamp), usize> = HashMap::new();
    for (i, row) in rows.iter().enumerate() {
        if !passes(filter, row) {
            out.filtered += 1;
            continue;
        }
        let line = i + 1;
        let Some(o) = normalize_one(line, row, field, &mut out.warnings) else {
            continue;
        };
        match first_seen.entry((o.category.clone(), o.stamp)) {
            Entry::Occupied(kept) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    category = %o.category,
                    month = %o.stamp,
                    line,
                    "duplicate observation dropped"
                );
                out.warnings.push(JobtroughError::malformed_row(
                    line,
                    format!(
                        "duplicate {} observation for {}; keeping line {}",
                        o.category,
                        o.stamp,
                        kept.get()
                    ),
                ));
            }
            Entry::Vacant(slot) => {
                slot.insert(line);
                out.observations.push(o);
            }
        }
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        accepted = out.observations.len(),
        filtered = out.filtered,
        malformed = out.warnings.len(),
        "normalized monthly rows"
    );
    out
}

/// Normalize annual rows.
///
/// Rows with an unreadable year are dropped with a warning. Blank or
/// non-numeric `value`/`yoy_change` cells become `None`.
#[must_use]
pub fn normalize_annual(rows: &[RawAnnualRow]) -> (Vec<AnnualPoint>, Vec<JobtroughError>) {
    let mut points = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        let Ok(year) = row.year.trim().parse::<i32>() else {
            warnings.push(JobtroughError::malformed_row(
                i + 1,
                format!("year is not numeric: {:?}", row.year),
            ));
            continue;
        };
        points.push(AnnualPoint {
            year,
            value: parse_value(&row.value),
            yoy_change: parse_value(&row.yoy_change),
        });
    }
    (points, warnings)
}
