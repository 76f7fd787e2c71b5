//! Time-series utilities shared by the loader and the story views.
//!
//! Modules include:
//! - `yoy`: year-over-year change and annual-to-monthly interpolation
//! - `align`: window slicing and event-time re-indexing
//! - `index`: rebasing to 100, change-from-start, causal smoothing
//! - `trough`: minimum search with first-occurrence tie-breaking
/// Window slicing and event-time re-indexing.
pub mod align;
/// Rebasing and smoothing of aligned series.
pub mod index;
/// Trough (minimum) search.
pub mod trough;
pub mod util;
/// Year-over-year change and monthly interpolation.
pub mod yoy;
