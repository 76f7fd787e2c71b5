use jobtrough::{AnnualPoint, jobs_lost};

use crate::helpers::{fixture_snapshot, ym};

#[tokio::test]
async fn overview_carries_annual_yoy_and_interpolated_months() {
    let snap = fixture_snapshot().await;
    let overview = snap.overview();
    assert_eq!(overview.annual.len(), 24);
    assert_eq!(overview.annual[0].yoy_change, None);
    let y2009 = overview.annual.iter().find(|p| p.year == 2009).unwrap();
    let expected = 131_313.0 / 137_242.0 - 1.0;
    assert!((y2009.yoy_change.unwrap() - expected).abs() < 1e-12);

    assert_eq!(overview.monthly.len(), 24 * 12);
    assert_eq!(overview.monthly[0].stamp, ym(2000, 1));
    assert_eq!(overview.monthly[0].value, Some(132_024.0));
    // Last year has no successor and stays flat.
    assert!(
        overview.monthly[276..]
            .iter()
            .all(|p| p.value == Some(156_051.0))
    );
}

#[tokio::test]
async fn overview_bands_report_jobs_lost() {
    let snap = fixture_snapshot().await;
    let overview = snap.overview();
    let summary: Vec<(&str, Option<f64>)> = overview
        .bands
        .iter()
        .map(|b| (b.id.as_str(), b.jobs_lost))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("2001", Some(1_677.0)),
            ("2008", Some(7_638.0)),
            ("2020", Some(8_718.0)),
        ]
    );
    let great = &overview.bands[1];
    assert_eq!(great.start_label, "Jan 2008");
    assert_eq!(great.end, ym(2010, 1));
    assert_eq!((great.year_start, great.year_end), (2008, 2010));
}

#[tokio::test]
async fn band_lookup_by_year() {
    let snap = fixture_snapshot().await;
    let overview = snap.overview();
    let id = |year| overview.band_for_year(year).map(|b| b.id.as_str());
    assert_eq!(id(2001), Some("2001"));
    assert_eq!(id(2003), Some("2001"));
    assert_eq!(id(2005), None);
    assert_eq!(id(2010), Some("2008"));
    assert_eq!(id(2011), None);
    assert_eq!(id(2022), Some("2020"));
}

#[test]
fn jobs_lost_is_floored_at_zero() {
    let annual = vec![
        AnnualPoint::new(2000, 100.0),
        AnnualPoint::new(2001, 110.0),
        AnnualPoint::new(2002, 120.0),
    ];
    assert_eq!(jobs_lost(&annual, 2001), Some(0.0));
}

#[test]
fn jobs_lost_needs_the_prior_year_and_a_defined_span() {
    let annual = vec![AnnualPoint::new(2001, 110.0), AnnualPoint::new(2002, 90.0)];
    assert_eq!(jobs_lost(&annual, 2001), None);
    let gaps = vec![
        AnnualPoint::new(2000, 100.0),
        AnnualPoint {
            year: 2001,
            value: None,
            yoy_change: None,
        },
    ];
    assert_eq!(jobs_lost(&gaps, 2001), None);
    assert_eq!(jobs_lost(&annual, 2002), Some(20.0));
}
