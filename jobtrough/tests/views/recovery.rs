use jobtrough::{
    AlignedPoint, AlignedSeries, Direction, JobtroughError, NARRATIVE_THRESHOLD, Scale,
    WindowKind, narrate,
};

use crate::helpers::{fixture_snapshot, ym};

#[tokio::test]
async fn total_economy_strengthens_after_the_great_recession() {
    let snap = fixture_snapshot().await;
    let story = snap.recovery_story("Total Economy", "2008").unwrap();
    assert_eq!(story.label, "Great Recession Recovery");
    assert_eq!(story.report.kind, WindowKind::Recovery);
    let series = story.report.series.as_ref().expect("series present");
    assert_eq!(series.scale, Scale::YoyChange);
    assert_eq!(series.len(), 46);

    let narrative = story.narrative.expect("narrative");
    assert_eq!(narrative.direction, Direction::Strengthened);
    assert_eq!(narrative.first_label, "Jun 2009");
    assert_eq!(narrative.last_label, "Mar 2013");
    assert!(narrative.first_value < 0.0);
    assert!(narrative.last_value > 0.0);
    let summary = narrative.summary("Total Economy");
    assert!(
        summary.starts_with("In Total Economy, employment strengthened over this recovery period."),
        "{summary}"
    );
    assert!(summary.contains("Between Jun 2009 and Mar 2013"));
}

#[tokio::test]
async fn steady_growth_reads_as_stable() {
    let snap = fixture_snapshot().await;
    let story = snap
        .recovery_story("Private Education and Health Services", "2001")
        .unwrap();
    let narrative = story.narrative.expect("narrative");
    assert_eq!(narrative.direction, Direction::Stable);
    assert!(
        narrative
            .summary("Education & Health")
            .contains("stayed relatively stable")
    );
}

#[tokio::test]
async fn recovery_story_rejects_unknown_windows() {
    let snap = fixture_snapshot().await;
    let err = snap
        .recovery_story("Total Economy", "1990")
        .err()
        .expect("unknown window");
    assert!(matches!(err, JobtroughError::UnknownWindow { .. }));
}

#[tokio::test]
async fn recovery_story_without_data_has_no_narrative() {
    let snap = fixture_snapshot().await;
    let story = snap.recovery_story("Trade", "2020").unwrap();
    assert!(story.narrative.is_none());
    assert!(!story.report.has_data());
}

#[test]
fn classification_uses_a_strict_threshold() {
    assert_eq!(Direction::classify(NARRATIVE_THRESHOLD), Direction::Stable);
    assert_eq!(Direction::classify(-NARRATIVE_THRESHOLD), Direction::Stable);
    assert_eq!(Direction::classify(0.006), Direction::Strengthened);
    assert_eq!(Direction::classify(-0.006), Direction::Weakened);
    assert_eq!(Direction::Weakened.to_string(), "weakened");
}

#[test]
fn narrate_skips_gaps_at_either_end() {
    let yoy = AlignedSeries {
        start: Some(ym(2020, 5)),
        scale: Scale::YoyChange,
        points: vec![
            AlignedPoint { months_since_start: 0, value: None },
            AlignedPoint { months_since_start: 1, value: Some(0.03) },
            AlignedPoint { months_since_start: 2, value: Some(0.02) },
            AlignedPoint { months_since_start: 3, value: Some(0.01) },
            AlignedPoint { months_since_start: 4, value: None },
        ],
    };
    let n = narrate(&yoy).unwrap();
    assert_eq!(n.direction, Direction::Weakened);
    assert_eq!(n.first_label, "Jun 2020");
    assert_eq!(n.last_label, "Aug 2020");
    assert!(n.summary("Retail").contains("from 3.0% to 1.0%"));
}

#[test]
fn narrate_single_point_is_stable() {
    let yoy = AlignedSeries {
        start: Some(ym(2020, 5)),
        scale: Scale::YoyChange,
        points: vec![AlignedPoint { months_since_start: 0, value: Some(0.01) }],
    };
    let n = narrate(&yoy).unwrap();
    assert_eq!(n.direction, Direction::Stable);
    assert_eq!(n.first_label, n.last_label);
    assert!(narrate(&AlignedSeries::default()).is_none());
}
