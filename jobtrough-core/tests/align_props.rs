use jobtrough_core::{
    AlignedPoint, AlignedSeries, JobtroughError, MonthStamp, Observation, RecessionWindow, Scale,
    WindowKind, change_from_start, find_trough, rebase_to_index100, reindex_to_event_time,
    slice_to_window, smooth_trailing_pair, to_decimal_time, truncate_to_horizon,
};
use proptest::prelude::*;

fn ms(y: i32, m: u32) -> MonthStamp {
    MonthStamp::new(y, m).unwrap()
}

fn window(start: MonthStamp, end: MonthStamp) -> RecessionWindow {
    RecessionWindow::new("w", "Window", WindowKind::Contraction, start, end).unwrap()
}

fn aligned(values: &[Option<f64>]) -> AlignedSeries {
    AlignedSeries {
        start: Some(ms(2007, 12)),
        scale: Scale::Level,
        points: values
            .iter()
            .enumerate()
            .map(|(i, v)| AlignedPoint {
                months_since_start: u32::try_from(i).unwrap(),
                value: *v,
            })
            .collect(),
    }
}

fn arb_stamp() -> impl Strategy<Value = MonthStamp> {
    (1990i32..2030, 1u32..=12).prop_map(|(y, m)| ms(y, m))
}

fn arb_monthly_series() -> impl Strategy<Value = Vec<Observation>> {
    prop::collection::vec(
        (arb_stamp(), prop::option::of(1_000.0f64..200_000.0)),
        0..80,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(stamp, value)| Observation {
                category: "Construction".into(),
                stamp,
                value,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn decimal_time_is_strictly_monotone(a in arb_stamp(), b in arb_stamp()) {
        let ta = to_decimal_time(a.year(), a.month()).unwrap();
        let tb = to_decimal_time(b.year(), b.month()).unwrap();
        prop_assert_eq!(a < b, ta < tb);
        prop_assert_eq!(a == b, ta == tb);
    }

    #[test]
    fn sliced_points_lie_inside_window(series in arb_monthly_series(), s in arb_stamp(), len in 0i64..60) {
        let end = s.add_months(len).unwrap();
        let w = window(s, end);
        let out = slice_to_window(&series, &w);
        prop_assert!(out.iter().all(|o| w.contains(o.stamp)));
        prop_assert!(out.windows(2).all(|p| p[0].stamp <= p[1].stamp));
        let expected = series.iter().filter(|o| w.contains(o.stamp)).count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn reindexed_offsets_are_non_negative_and_bounded(series in arb_monthly_series(), s in arb_stamp(), len in 0i64..60) {
        let w = window(s, s.add_months(len).unwrap());
        let windowed = slice_to_window(&series, &w);
        let aligned = reindex_to_event_time(&windowed, w.start);
        prop_assert_eq!(aligned.len(), windowed.len());
        for (p, o) in aligned.points.iter().zip(&windowed) {
            prop_assert_eq!(i64::from(p.months_since_start), o.stamp.months_since(w.start));
            prop_assert!(i64::from(p.months_since_start) < w.len_months());
        }
    }

    #[test]
    fn rebased_first_point_is_exactly_100(values in prop::collection::vec(1.0f64..1.0e6, 1..40)) {
        let s = aligned(&values.iter().copied().map(Some).collect::<Vec<_>>());
        let idx = rebase_to_index100(&s).unwrap();
        prop_assert_eq!(idx.points[0].value, Some(100.0));
        prop_assert_eq!(idx.len(), s.len());
        prop_assert_eq!(idx.scale, Scale::Index100);
    }

    #[test]
    fn pipeline_is_idempotent(series in arb_monthly_series(), s in arb_stamp(), len in 0i64..40) {
        let w = window(s, s.add_months(len).unwrap());
        let run = || {
            let windowed = slice_to_window(&series, &w);
            let aligned = reindex_to_event_time(&windowed, w.start);
            rebase_to_index100(&smooth_trailing_pair(&aligned)).ok()
        };
        let (a, b) = (run(), run());
        let bits = |s: &Option<AlignedSeries>| {
            s.as_ref().map(|s| {
                s.points
                    .iter()
                    .map(|p| (p.months_since_start, p.value.map(f64::to_bits)))
                    .collect::<Vec<_>>()
            })
        };
        prop_assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn trough_is_a_minimum_and_earliest(values in prop::collection::vec(prop::option::of(0i32..20), 0..40)) {
        let s = aligned(&values.iter().map(|v| v.map(f64::from)).collect::<Vec<_>>());
        match find_trough(&s.points) {
            None => prop_assert!(values.iter().all(Option::is_none)),
            Some(t) => {
                prop_assert!(s.values().all(|v| t.value <= v));
                let first = values.iter().position(|v| v.map(f64::from) == Some(t.value)).unwrap();
                prop_assert_eq!(t.position, first);
            }
        }
    }

    #[test]
    fn smoothing_never_reads_ahead(values in prop::collection::vec(1.0f64..100.0, 2..30), cut in 1usize..30) {
        let cut = cut.min(values.len());
        let full = smooth_trailing_pair(&aligned(&values.iter().copied().map(Some).collect::<Vec<_>>()));
        let prefix = smooth_trailing_pair(&aligned(&values[..cut].iter().copied().map(Some).collect::<Vec<_>>()));
        prop_assert_eq!(&full.points[..cut], &prefix.points[..]);
    }
}

#[test]
fn rebase_example_matches_hand_computation() {
    let s = aligned(&[Some(200.0), Some(180.0), Some(220.0)]);
    let idx = rebase_to_index100(&s).unwrap();
    let vals: Vec<f64> = idx.values().collect();
    assert_eq!(vals, vec![100.0, 90.0, 110.0]);
}

#[test]
fn rebase_rejects_unusable_baselines() {
    for bad in [
        aligned(&[]),
        aligned(&[Some(0.0), Some(10.0)]),
        aligned(&[None, Some(10.0)]),
        aligned(&[Some(f64::NAN), Some(10.0)]),
    ] {
        let err = rebase_to_index100(&bad).unwrap_err();
        assert!(matches!(err, JobtroughError::InvalidBaseline { .. }), "{err:?}");
        assert!(err.is_recoverable());
    }
}

#[test]
fn change_from_start_is_zero_at_start() {
    let s = aligned(&[Some(200.0), Some(190.0), None, Some(210.0)]);
    let c = change_from_start(&s).unwrap();
    assert_eq!(c.scale, Scale::ChangeFromStart);
    assert_eq!(c.points[0].value, Some(0.0));
    assert!((c.points[1].value.unwrap() + 0.05).abs() < 1e-12);
    assert_eq!(c.points[2].value, None);
    assert!((c.points[3].value.unwrap() - 0.05).abs() < 1e-12);
}

#[test]
fn trough_ties_pick_first_and_skip_gaps() {
    let s = aligned(&[Some(5.0), None, Some(3.0), Some(f64::NAN), Some(3.0), Some(4.0)]);
    let t = find_trough(&s.points).unwrap();
    assert_eq!(t.position, 2);
    assert_eq!(t.point.months_since_start, 2);
    assert!((t.depth_below(5.0) - 2.0).abs() < f64::EPSILON);
    assert!(find_trough::<AlignedPoint>(&[]).is_none());
}

#[test]
fn empty_slice_is_no_data_not_error() {
    let series = vec![Observation {
        category: "Mining and logging".into(),
        stamp: ms(1999, 5),
        value: Some(600.0),
    }];
    let out = slice_to_window(&series, &window(ms(2007, 12), ms(2009, 6)));
    assert!(out.is_empty());
    assert!(reindex_to_event_time(&out, ms(2007, 12)).is_empty());
}

#[test]
fn great_recession_window_reindexes_to_eighteen_months() {
    let series: Vec<Observation> = (0..40)
        .map(|i| Observation {
            category: "Total nonfarm".into(),
            stamp: ms(2007, 1).add_months(i).unwrap(),
            value: Some(1000.0),
        })
        .collect();
    let w = window(ms(2007, 12), ms(2009, 6));
    let aligned = reindex_to_event_time(&slice_to_window(&series, &w), w.start);
    assert_eq!(aligned.len(), 19);
    assert_eq!(aligned.points.last().unwrap().months_since_start, 18);
    assert_eq!(aligned.stamp_of(&aligned.points[18]), Some(ms(2009, 6)));
}

#[test]
fn smoothing_averages_with_previous_and_respects_gaps() {
    let s = aligned(&[Some(10.0), Some(20.0), None, Some(40.0), Some(60.0)]);
    let out = smooth_trailing_pair(&s);
    let vals: Vec<Option<f64>> = out.points.iter().map(|p| p.value).collect();
    assert_eq!(vals, vec![Some(10.0), Some(15.0), None, Some(40.0), Some(50.0)]);
}

#[test]
fn truncation_keeps_horizon_inclusive() {
    let s = aligned(&[Some(1.0); 30]);
    let t = truncate_to_horizon(&s, 24);
    assert_eq!(t.len(), 25);
    assert_eq!(t.points.last().unwrap().months_since_start, 24);
}
