use jobtrough::{
    AlignSpec, JobtroughError, RecessionWindow, Scale, Smoothing, WindowKind,
};

use crate::helpers::{fixture_snapshot, ym};

#[tokio::test]
async fn unknown_window_is_an_error() {
    let snap = fixture_snapshot().await;
    let err = snap
        .align("Construction", WindowKind::Contraction, "1990", &AlignSpec::level())
        .err()
        .expect("unknown window");
    assert_eq!(
        err,
        JobtroughError::unknown_window(WindowKind::Contraction, "1990")
    );
}

#[tokio::test]
async fn great_recession_contraction_spans_nineteen_months() {
    let snap = fixture_snapshot().await;
    let report = snap
        .align("Total Economy", WindowKind::Contraction, "2008", &AlignSpec::level())
        .unwrap();
    assert!(report.warnings.is_empty());
    let series = report.series.expect("series present");
    assert_eq!(series.len(), 19);
    assert_eq!(series.scale, Scale::Level);
    let months: Vec<u32> = series.points.iter().map(|p| p.months_since_start).collect();
    assert_eq!(months, (0..19).collect::<Vec<_>>());
    assert_eq!(series.stamp_of(&series.points[0]), Some(ym(2007, 12)));
    assert_eq!(series.stamp_of(&series.points[18]), Some(ym(2009, 6)));
}

#[tokio::test]
async fn index100_starts_at_exactly_one_hundred() {
    let snap = fixture_snapshot().await;
    for id in ["2001", "2008", "2020"] {
        let report = snap
            .align("Construction", WindowKind::Contraction, id, &AlignSpec::index100())
            .unwrap();
        let series = report.series.expect("series present");
        assert_eq!(series.scale, Scale::Index100);
        assert_eq!(series.points[0].value, Some(100.0));
    }
}

#[tokio::test]
async fn missing_category_degrades_to_no_data() {
    let snap = fixture_snapshot().await;
    let report = snap
        .align("Trade", WindowKind::Contraction, "2008", &AlignSpec::index100())
        .unwrap();
    assert!(!report.has_data());
    assert!(report.series.is_none());
    assert_eq!(report.warnings, vec![JobtroughError::missing_category("Trade")]);
}

#[tokio::test]
async fn window_outside_the_data_degrades_to_no_data() {
    let snap = fixture_snapshot().await;
    let window = RecessionWindow::new(
        "1990",
        "Early 1990s Recession",
        WindowKind::Contraction,
        ym(1990, 7),
        ym(1991, 3),
    )
    .unwrap();
    let report = snap.align_window("Construction", &window, &AlignSpec::level());
    assert!(report.series.is_none());
    assert_eq!(
        report.warnings,
        vec![JobtroughError::empty_window("Construction", "1990")]
    );
}

#[tokio::test]
async fn horizon_truncates_before_rescaling() {
    let snap = fixture_snapshot().await;
    let spec = AlignSpec::change_from_start().with_horizon(6);
    let report = snap
        .align("Construction", WindowKind::Recovery, "2008", &spec)
        .unwrap();
    let series = report.series.expect("series present");
    assert_eq!(series.len(), 7);
    assert_eq!(series.points[0].value, Some(0.0));
    assert_eq!(series.points.last().map(|p| p.months_since_start), Some(6));
}

#[tokio::test]
async fn smoothing_keeps_the_first_point_and_averages_the_rest() {
    let snap = fixture_snapshot().await;
    let raw = snap
        .align("Retail Trade", WindowKind::Shock, "2020", &AlignSpec::level())
        .unwrap()
        .series
        .unwrap();
    let smoothed = snap
        .align(
            "Retail Trade",
            WindowKind::Shock,
            "2020",
            &AlignSpec::level().with_smoothing(Smoothing::TrailingPair),
        )
        .unwrap()
        .series
        .unwrap();
    assert_eq!(raw.len(), smoothed.len());
    assert_eq!(smoothed.points[0].value, raw.points[0].value);
    for i in 1..raw.len() {
        let (a, b) = (raw.points[i - 1].value.unwrap(), raw.points[i].value.unwrap());
        let s = smoothed.points[i].value.unwrap();
        assert!((s - (a + b) / 2.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn yoy_scale_aligns_year_over_year_change() {
    let snap = fixture_snapshot().await;
    let report = snap
        .align(
            "Education and health services",
            WindowKind::Recovery,
            "2001",
            &AlignSpec::yoy_change(),
        )
        .unwrap();
    let series = report.series.expect("series present");
    assert_eq!(series.scale, Scale::YoyChange);
    assert_eq!(series.stamp_of(&series.points[0]), Some(ym(2001, 12)));
    // No downturn in this industry: growth stays at its 2.2% trend.
    assert!(series.values().all(|v| (v - 0.022).abs() < 1e-4));
}

#[tokio::test]
async fn alignment_is_deterministic() {
    let snap = fixture_snapshot().await;
    let spec = AlignSpec::index100()
        .with_smoothing(Smoothing::TrailingPair)
        .with_horizon(24);
    let a = snap
        .align("Information", WindowKind::Shock, "2001", &spec)
        .unwrap();
    let b = snap
        .align("Information", WindowKind::Shock, "2001", &spec)
        .unwrap();
    assert_eq!(a, b);
    let bits = |r: &jobtrough::SeriesReport| -> Vec<u64> {
        r.series
            .as_ref()
            .map(|s| s.values().map(f64::to_bits).collect())
            .unwrap_or_default()
    };
    assert_eq!(bits(&a), bits(&b));
}

#[tokio::test]
async fn horizon_before_the_first_point_degrades_to_no_data() {
    let snap = fixture_snapshot().await;
    // The fixture starts in January 2000, seven months into this window.
    let window = RecessionWindow::new(
        "1999",
        "Late 1999",
        WindowKind::Shock,
        ym(1999, 6),
        ym(2000, 12),
    )
    .unwrap();
    for spec in [
        AlignSpec::level().with_horizon(3),
        AlignSpec::index100().with_horizon(3),
    ] {
        let report = snap.align_window("Construction", &window, &spec);
        assert!(report.series.is_none(), "{:?}", spec.scale);
        assert_eq!(
            report.warnings,
            vec![JobtroughError::empty_window("Construction", "1999")]
        );
    }
    let kept = snap.align_window("Construction", &window, &AlignSpec::level().with_horizon(7));
    assert_eq!(kept.series.map(|s| s.len()), Some(1));
}
