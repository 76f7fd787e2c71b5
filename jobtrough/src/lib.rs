//! Jobtrough puts U.S. employment series on a recession-relative time axis.
//!
//! Overview
//! - Loads monthly and annual employment tables once from an
//!   [`ObservationSource`] into an immutable [`Snapshot`].
//! - Aligns any category to a named contraction, recovery or shock window:
//!   slice, re-index to months since the window start, optionally smooth,
//!   truncate and rescale (index 100, change from start, or YoY change).
//! - Builds the story views on top of that pipeline: contraction profiles,
//!   indexed shock paths with landing metrics, recovery YoY with a narrative
//!   summary, and the long-run overview with recession bands.
//! - Keeps the reader's selection in an explicit reducer ([`Selection`]).
//!
//! Key behaviors and trade-offs
//! - Load: the three source calls run concurrently under one timeout. Any
//!   failure yields `DataUnavailable` or `LoadTimeout` and no partial snapshot.
//! - Degradation: a missing category, an empty window or an unusable baseline
//!   only empties the affected series; the reason is kept in the
//!   [`SeriesReport`] warnings and every other series is still produced.
//! - Name matching goes through an explicit alias table checked against the
//!   dataset at load time. There is no substring matching.
//! - Annual-to-monthly interpolation fabricates monthly points for display
//!   only; it is not an estimate of monthly levels.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use jobtrough::{Jobtrough, WindowKind, AlignSpec};
//!
//! let jt = Jobtrough::builder()
//!     .with_source(Arc::new(jobtrough_mock::MockSource::new()))
//!     .build()?;
//! let snapshot = jt.load().await?;
//!
//! let report = snapshot.align("Construction", WindowKind::Contraction, "2008", &AlignSpec::index100())?;
//! let shocks = snapshot.shock_paths("Leisure and Hospitality");
//! let story = snapshot.recovery_story("Total Economy", "2020")?;
//! ```
//!
//! See `jobtrough/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

pub(crate) mod core;
mod selection;
mod snapshot;
mod views;

pub use core::{Jobtrough, JobtroughBuilder};
pub use selection::{IndustryChoice, Selection, SelectionEvent};
pub use snapshot::Snapshot;
pub use views::align::AlignSpec;
pub use views::overview::{Overview, RecessionBand, jobs_lost};
pub use views::profiles::ContractionProfiles;
pub use views::recovery::{Direction, NARRATIVE_THRESHOLD, Narrative, RecoveryStory, narrate};
pub use views::shock::{Landing, ShockPath, ShockReport, landing_metrics};

// Re-export core types for convenience
pub use jobtrough_core::{
    AliasPolicy, AliasTable, AlignedPoint, AlignedSeries, AnnualPoint, CategoryField,
    JobtroughConfig, JobtroughError, LoadReport, MonthStamp, MonthlyPoint, Observation,
    ObservationSource, RawAnnualRow, RawMonthlyRow, RecessionWindow, RowFilter, Scale,
    SeriesReport, Smoothing, Supersector, SupersectorTable, WindowCatalog, WindowKind,
};
