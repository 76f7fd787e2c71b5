use jobtrough::{JobtroughError, Scale};

use crate::helpers::fixture_snapshot;

#[tokio::test]
async fn construction_profiles_share_one_axis() {
    let snap = fixture_snapshot().await;
    let profiles = snap.contraction_profiles("Construction");
    assert_eq!(profiles.category, "Construction");
    let ids: Vec<&str> = profiles.profiles.iter().map(|r| r.window_id.as_str()).collect();
    assert_eq!(ids, vec!["2001", "2008", "2020"]);

    for report in &profiles.profiles {
        let series = report.series.as_ref().expect("series present");
        assert_eq!(series.scale, Scale::ChangeFromStart);
        assert_eq!(series.points[0].value, Some(0.0));
    }
    let (lo, hi) = profiles.y_extent.expect("extent present");
    assert!(lo < -0.15, "deep 2008 construction loss, got {lo}");
    assert!(hi >= 0.0);
    for v in profiles
        .profiles
        .iter()
        .filter_map(|r| r.series.as_ref())
        .flat_map(|s| s.values())
    {
        assert!((lo..=hi).contains(&v));
    }
}

#[tokio::test]
async fn profile_lookup_by_window_id() {
    let snap = fixture_snapshot().await;
    let profiles = snap.contraction_profiles("Durable Goods");
    let covid = profiles.profile("2020").expect("2020 profile");
    assert_eq!(covid.series.as_ref().map(|s| s.len()), Some(3));
    assert!(profiles.profile("1990").is_none());
}

#[tokio::test]
async fn unknown_category_profiles_carry_warnings_only() {
    let snap = fixture_snapshot().await;
    let profiles = snap.contraction_profiles("Trade");
    assert_eq!(profiles.profiles.len(), 3);
    assert!(profiles.y_extent.is_none());
    assert!(profiles.profile("2008").is_none());
    for report in &profiles.profiles {
        assert_eq!(
            report.warnings,
            vec![JobtroughError::missing_category("Trade")]
        );
    }
}
