use async_trait::async_trait;

use crate::rows::{RawAnnualRow, RawMonthlyRow};
use jobtrough_types::{JobtroughError, SupersectorTable};

/// Provider of the raw tables a snapshot is built from.
///
/// Implementations wrap whatever actually fetches and parses the static files
/// (HTTP, disk, an embedded fixture). Each method is called at most once per
/// load and the three calls run concurrently.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// Stable name used in error attribution, e.g. `"jobtrough-mock"`.
    fn name(&self) -> &'static str;

    /// Monthly observations for every category.
    async fn monthly_rows(&self) -> Result<Vec<RawMonthlyRow>, JobtroughError>;

    /// Annual summary rows for the whole economy.
    ///
    /// Defaults to an empty table for sources that only carry monthly data.
    async fn annual_rows(&self) -> Result<Vec<RawAnnualRow>, JobtroughError> {
        Ok(Vec::new())
    }

    /// Supersector code lookup.
    ///
    /// Defaults to the built-in CES table.
    async fn supersectors(&self) -> Result<SupersectorTable, JobtroughError> {
        Ok(SupersectorTable::ces_defaults())
    }
}
