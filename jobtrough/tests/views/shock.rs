use jobtrough::{AlignedPoint, AlignedSeries, Scale, landing_metrics};

use crate::helpers::{fixture_snapshot, unsmoothed_snapshot, ym};

fn index_series(values: &[Option<f64>]) -> AlignedSeries {
    AlignedSeries {
        start: Some(ym(2020, 1)),
        scale: Scale::Index100,
        points: values
            .iter()
            .zip(0u32..)
            .map(|(&value, months_since_start)| AlignedPoint {
                months_since_start,
                value,
            })
            .collect(),
    }
}

#[tokio::test]
async fn shock_paths_cover_the_horizon_from_index_100() {
    let snap = fixture_snapshot().await;
    let report = snap.shock_paths("Leisure and Hospitality");
    assert_eq!(report.horizon_months, 24);
    let labels: Vec<&str> = report.paths.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "2001 Dot-com Recession",
            "2008 Great Recession",
            "2020 COVID-19 Recession"
        ]
    );
    for path in &report.paths {
        let series = path.report.series.as_ref().expect("series present");
        assert_eq!(series.len(), 25);
        assert_eq!(series.scale, Scale::Index100);
        assert_eq!(series.points[0].value, Some(100.0));
        assert!(path.landing.is_some());
    }
}

#[tokio::test]
async fn covid_leisure_landing_without_smoothing() {
    let snap = unsmoothed_snapshot().await;
    let report = snap.shock_paths("Leisure and Hospitality");
    let landing = report.paths[2].landing.as_ref().expect("landing");
    assert_eq!(landing.trough, ym(2020, 4));
    assert_eq!(landing.trough_label, "Apr 2020");
    assert_eq!(landing.trough_months_since_start, 4);
    assert!(landing.trough_change < -45.0, "{}", landing.trough_change);
    let delta = landing.delta_at_horizon.expect("defined at horizon");
    assert!(delta < 0.0 && delta > landing.trough_change);
}

#[tokio::test]
async fn smoothing_moves_the_covid_trough_later() {
    let snap = fixture_snapshot().await;
    let report = snap.shock_paths("Leisure and Hospitality");
    let landing = report.paths[2].landing.as_ref().expect("landing");
    assert_eq!(landing.trough, ym(2020, 5));
}

#[tokio::test]
async fn unknown_category_has_no_landing() {
    let snap = fixture_snapshot().await;
    let report = snap.shock_paths("Trade");
    assert!(report.paths.iter().all(|p| p.landing.is_none()));
    assert!(report.paths.iter().all(|p| !p.report.warnings.is_empty()));
}

#[test]
fn landing_reads_the_horizon_point() {
    let series = index_series(&[Some(100.0), Some(90.0), Some(95.0)]);
    let landing = landing_metrics(&series, 1).unwrap();
    assert_eq!(landing.delta_at_horizon, Some(-10.0));
    assert_eq!(landing.trough, ym(2020, 2));
    assert_eq!(landing.trough_months_since_start, 1);
    assert_eq!(landing.trough_change, -10.0);
}

#[test]
fn landing_falls_back_to_the_last_point_for_short_series() {
    let series = index_series(&[Some(100.0), Some(90.0), Some(95.0)]);
    let landing = landing_metrics(&series, 24).unwrap();
    assert_eq!(landing.delta_at_horizon, Some(-5.0));
}

#[test]
fn landing_keeps_a_gap_at_the_horizon() {
    let series = index_series(&[Some(100.0), None, Some(95.0)]);
    let landing = landing_metrics(&series, 1).unwrap();
    assert_eq!(landing.delta_at_horizon, None);
    assert_eq!(landing.trough_months_since_start, 2);
}

#[test]
fn landing_needs_data_and_an_anchor() {
    assert!(landing_metrics(&index_series(&[]), 24).is_none());
    assert!(landing_metrics(&index_series(&[None, None]), 24).is_none());
    let mut unanchored = index_series(&[Some(100.0)]);
    unanchored.start = None;
    assert!(landing_metrics(&unanchored, 24).is_none());
}
