//! Configuration types shared across the loader and the alignment pipeline.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Raw column used as the category key of monthly rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum CategoryField {
    /// CES series id (e.g. `CES3000000001`), trimmed.
    SeriesId,
    /// Two-digit supersector code (e.g. `30`).
    SupersectorCode,
    /// Free-text industry name (e.g. `Durable goods manufacturing`).
    #[default]
    Industry,
}

/// Row-level filters applied while normalizing monthly rows.
///
/// A `None` field disables that filter. Rows lacking the filtered column pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    /// Required seasonal adjustment flag, e.g. `"S"`.
    pub seasonal: Option<String>,
    /// Required CES data type code, e.g. `"01"` (all employees).
    pub data_type_code: Option<String>,
}

impl Default for RowFilter {
    fn default() -> Self {
        Self {
            seasonal: Some("S".into()),
            data_type_code: Some("01".into()),
        }
    }
}

impl RowFilter {
    /// Filter that keeps every row.
    #[must_use]
    pub const fn keep_all() -> Self {
        Self {
            seasonal: None,
            data_type_code: None,
        }
    }
}

/// Noise reduction applied to a level series before rebasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Smoothing {
    /// Use values as observed.
    None,
    /// Mean of the current and immediately preceding point (first point kept as is).
    #[default]
    TrailingPair,
}

/// How configured aliases that match no loaded category are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum AliasPolicy {
    /// Record an `UnmatchedAlias` warning per alias and keep loading.
    #[default]
    Report,
    /// Fail the load on the first unmatched alias.
    Strict,
}

/// Global configuration for the `Jobtrough` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobtroughConfig {
    /// Which raw column identifies a category.
    pub category_field: CategoryField,
    /// Row filters applied during normalization.
    pub row_filter: RowFilter,
    /// Smoothing applied to shock paths before rebasing.
    pub shock_smoothing: Smoothing,
    /// Months after the shock window start covered by shock paths and landing metrics.
    pub shock_horizon_months: u32,
    /// Treatment of unmatched aliases at load time.
    pub alias_policy: AliasPolicy,
    /// Upper bound on the one-shot load.
    pub load_timeout: Duration,
}

impl Default for JobtroughConfig {
    fn default() -> Self {
        Self {
            category_field: CategoryField::default(),
            row_filter: RowFilter::default(),
            shock_smoothing: Smoothing::TrailingPair,
            shock_horizon_months: 24,
            alias_policy: AliasPolicy::Report,
            load_timeout: Duration::from_secs(10),
        }
    }
}
