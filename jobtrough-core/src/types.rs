//! Re-export of foundational types from `jobtrough-types`.
// Consolidated re-exports so downstream crates can depend on `jobtrough-core` only

pub use jobtrough_types::{
    AliasPolicy, AliasTable, CategoryField, JobtroughConfig, RowFilter, Smoothing,
    normalize_name,
};
pub use jobtrough_types::{
    AlignedPoint, AlignedSeries, AnnualPoint, Dated, MonthlyPoint, Observation, Scale, Valued,
};
pub use jobtrough_types::{JobtroughError, LoadReport, SeriesReport};
pub use jobtrough_types::{MonthStamp, to_decimal_time};
pub use jobtrough_types::{RecessionWindow, Supersector, SupersectorTable, WindowCatalog, WindowKind};
