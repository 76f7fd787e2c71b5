// Re-export helpers so tests can `use helpers::*;`
use std::sync::Arc;

use jobtrough::{Jobtrough, JobtroughBuilder, MonthStamp, Smoothing, Snapshot};
use jobtrough_mock::MockSource;

/// Builder preloaded with the fixture source.
pub fn fixture_builder() -> JobtroughBuilder {
    Jobtrough::builder().with_source(Arc::new(MockSource::new()))
}

/// Snapshot of the built-in fixture with default settings.
pub async fn fixture_snapshot() -> Snapshot {
    fixture_builder()
        .build()
        .expect("fixture builder is valid")
        .load()
        .await
        .expect("fixture loads")
}

/// Snapshot of the built-in fixture with shock smoothing disabled.
#[allow(dead_code)]
pub async fn unsmoothed_snapshot() -> Snapshot {
    fixture_builder()
        .shock_smoothing(Smoothing::None)
        .build()
        .expect("fixture builder is valid")
        .load()
        .await
        .expect("fixture loads")
}

/// Construct a month stamp for readability in tests.
#[allow(dead_code)]
pub fn ym(year: i32, month: u32) -> MonthStamp {
    MonthStamp::new(year, month).expect("valid month")
}
