use std::sync::Arc;

use jobtrough::{AlignSpec, Jobtrough, WindowKind};
use jobtrough_mock::MockSource;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,jobtrough=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let jt = Jobtrough::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;
    let snapshot = jt.load().await?;

    // A known series, then one that degrades with a logged warning.
    let _ = snapshot.align("Construction", WindowKind::Contraction, "2008", &AlignSpec::index100())?;
    let _ = snapshot.align("Trade", WindowKind::Contraction, "2008", &AlignSpec::index100())?;

    // Views
    let _ = snapshot.shock_paths("Leisure and Hospitality");
    let _ = snapshot.overview();

    Ok(())
}
