//! Jobtrough data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod alias;
mod config;
mod error;
mod reports;
mod series;
mod stamp;
mod supersector;
mod window;

pub use alias::{AliasTable, normalize_name};
pub use config::{AliasPolicy, CategoryField, JobtroughConfig, RowFilter, Smoothing};
pub use error::JobtroughError;
pub use reports::{LoadReport, SeriesReport};
pub use series::{
    AlignedPoint, AlignedSeries, AnnualPoint, Dated, MonthlyPoint, Observation, Scale, Valued,
};
pub use stamp::{MonthStamp, to_decimal_time};
pub use supersector::{Supersector, SupersectorTable};
pub use window::{RecessionWindow, WindowCatalog, WindowKind};
