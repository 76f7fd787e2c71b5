use async_trait::async_trait;
use jobtrough_core::{
    JobtroughError, ObservationSource, RawAnnualRow, RawMonthlyRow, SupersectorTable,
};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// First and last calendar year covered by the monthly fixture.
pub const FIXTURE_YEARS: (i32, i32) = (fixtures::monthly::FIRST_YEAR, fixtures::monthly::LAST_YEAR);

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
///
/// The monthly fixture carries sixteen industries shaped with dips around the
/// 2001, 2008 and 2020 downturns; the annual fixture carries total nonfarm
/// annual averages.
pub struct MockSource {
    monthly: Vec<RawMonthlyRow>,
    annual: Vec<RawAnnualRow>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Source backed by the built-in fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            monthly: fixtures::monthly::all_rows(),
            annual: fixtures::annual::totals(),
        }
    }

    /// Source backed by caller-provided rows.
    #[must_use]
    pub const fn with_rows(monthly: Vec<RawMonthlyRow>, annual: Vec<RawAnnualRow>) -> Self {
        Self { monthly, annual }
    }

    /// Industry names present in the built-in monthly fixture.
    #[must_use]
    pub fn fixture_industries() -> Vec<&'static str> {
        fixtures::monthly::industries()
    }
}

#[async_trait]
impl ObservationSource for MockSource {
    fn name(&self) -> &'static str {
        "jobtrough-mock"
    }

    async fn monthly_rows(&self) -> Result<Vec<RawMonthlyRow>, JobtroughError> {
        Ok(self.monthly.clone())
    }

    async fn annual_rows(&self) -> Result<Vec<RawAnnualRow>, JobtroughError> {
        Ok(self.annual.clone())
    }

    async fn supersectors(&self) -> Result<SupersectorTable, JobtroughError> {
        Ok(SupersectorTable::ces_defaults())
    }
}
