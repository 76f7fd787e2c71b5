use std::sync::Arc;

use jobtrough::{Jobtrough, Selection, SelectionEvent};
use jobtrough_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the orchestrator over the deterministic fixture source.
    let jt = Jobtrough::builder()
        .with_source(Arc::new(MockSource::new()))
        .build()?;

    // 2. Load once. Every view below reads from this snapshot.
    let snapshot = jt.load().await?;
    let report = snapshot.load_report();
    println!(
        "Loaded {} monthly rows across {} categories ({} warnings).",
        report.monthly_rows,
        report.categories,
        report.warnings.len()
    );

    // 3. Long-run overview with recession bands.
    let overview = snapshot.overview();
    for band in &overview.bands {
        let lost = band
            .jobs_lost
            .map_or_else(|| "n/a".to_string(), |v| format!("{v:.0}k"));
        println!("{} (from {}): jobs lost {lost}", band.label, band.start_label);
    }

    // 4. A reader picks a recession and an industry.
    let selection = Selection::default().replay(&[
        SelectionEvent::ToggleRecession("2008".into()),
        SelectionEvent::SelectIndustry {
            key: "Construction".into(),
            label: "Construction".into(),
        },
    ]);
    let (Some(recession), Some(industry)) = (&selection.recession, &selection.industry) else {
        return Ok(());
    };

    // 5. Contraction profile for the chosen recession.
    let profiles = snapshot.contraction_profiles(&industry.key);
    if let Some(series) = profiles.profile(recession).and_then(|r| r.series.as_ref()) {
        let deepest = series.values().fold(f64::INFINITY, f64::min);
        println!(
            "{}: deepest contraction {:.1}% over {} months",
            industry.label,
            deepest * 100.0,
            series.len()
        );
    }

    // 6. Shock paths and their landing points.
    for path in snapshot.shock_paths(&industry.key).paths {
        if let Some(landing) = path.landing {
            println!(
                "{}: trough {} ({:+.1}), {:+.1} after {} months",
                path.label,
                landing.trough_label,
                landing.trough_change,
                landing.delta_at_horizon.unwrap_or(f64::NAN),
                jt.config().shock_horizon_months
            );
        }
    }

    // 7. Recovery narrative.
    let story = snapshot.recovery_story(&industry.key, recession)?;
    if let Some(narrative) = story.narrative {
        println!("{}", narrative.summary(&industry.label));
    }

    Ok(())
}
