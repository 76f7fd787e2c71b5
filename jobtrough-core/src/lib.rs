//! jobtrough-core
//!
//! Core types, traits, and utilities shared across the jobtrough ecosystem.
//!
//! - `types`: common data structures (month stamps, windows, points, configuration).
//! - `source`: the `ObservationSource` trait a snapshot is loaded from.
//! - `rows`: normalization of raw string records into typed observations.
//! - `timeseries`: the alignment operations (YoY, interpolation, window slicing,
//!   event-time re-indexing, rebasing, smoothing, trough search).
//!
//! Every function in `timeseries` is pure: it borrows its input and returns a
//! new value, so the same snapshot can be re-aligned any number of times with
//! bit-identical results.
#![warn(missing_docs)]

/// Normalization of raw monthly and annual rows.
pub mod rows;
/// The asynchronous observation-source trait.
pub mod source;
/// Time-series utilities for alignment and indexing.
pub mod timeseries;
pub mod types;

pub use rows::{NormalizedRows, RawAnnualRow, RawMonthlyRow, normalize_annual, normalize_monthly};
pub use source::ObservationSource;
pub use timeseries::align::{
    drop_gaps, reindex_by, reindex_to_event_time, slice_to_window, truncate_to_horizon,
};
pub use timeseries::index::{change_from_start, rebase_to_index100, smooth, smooth_trailing_pair};
pub use timeseries::trough::{Trough, find_trough};
pub use timeseries::util::group_by_category;
pub use timeseries::yoy::{compute_monthly_yoy, compute_yoy, fractional_change, interpolate_monthly};
pub use types::*;
