use jobtrough::{Overview, RecoveryStory, ShockReport};

use crate::helpers::{fixture_snapshot, unsmoothed_snapshot};

#[tokio::test]
async fn shock_report_serializes_months_as_labels() {
    let snap = unsmoothed_snapshot().await;
    let report = snap.shock_paths("Leisure and Hospitality");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["paths"][2]["landing"]["trough"], "2020-04");
    assert_eq!(json["paths"][2]["report"]["kind"], "shock");
    assert_eq!(json["paths"][2]["report"]["series"]["scale"], "index100");

    let back: ShockReport = serde_json::from_value(json).unwrap();
    assert_eq!(back.paths.len(), report.paths.len());
    assert_eq!(back.paths[2].landing.as_ref().map(|l| l.trough), Some(
        report.paths[2].landing.as_ref().unwrap().trough
    ));
}

#[tokio::test]
async fn degraded_reports_keep_their_warnings_on_the_wire() {
    let snap = fixture_snapshot().await;
    let story = snap.recovery_story("Trade", "2008").unwrap();
    let text = serde_json::to_string(&story).unwrap();
    let back: RecoveryStory = serde_json::from_str(&text).unwrap();
    assert_eq!(back, story);
    assert!(back.narrative.is_none());
}

#[tokio::test]
async fn overview_round_trips_structurally() {
    let snap = fixture_snapshot().await;
    let overview = snap.overview();
    let json = serde_json::to_value(&overview).unwrap();
    assert_eq!(json["bands"][0]["start"], "2001-03");
    assert_eq!(json["bands"][0]["start_label"], "Mar 2001");
    assert!(json["annual"][0]["yoy_change"].is_null());

    let back: Overview = serde_json::from_value(json).unwrap();
    assert_eq!(back.bands.len(), 3);
    assert_eq!(back.monthly.len(), overview.monthly.len());
    assert_eq!(back.band_for_year(2021).map(|b| b.id.as_str()), Some("2020"));
}
