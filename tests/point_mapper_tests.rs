use bench_charts::ChartError;
use bench_charts::core::{DataPoint, RawRecord, to_points};

#[test]
fn records_map_to_points_in_input_order() {
    let points = to_points(
        "QuTiP",
        &[RawRecord::new(10.0, 0.5), RawRecord::new(100.0, 4.2)],
    )
    .expect("map");
    assert_eq!(
        points,
        vec![DataPoint::new(10.0, 0.5), DataPoint::new(100.0, 4.2)]
    );
}

#[test]
fn unsorted_input_is_not_reordered() {
    let points = to_points(
        "QuTiP",
        &[
            RawRecord::new(50.0, 3.0),
            RawRecord::new(10.0, 1.0),
            RawRecord::new(50.0, 2.0),
        ],
    )
    .expect("map");
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![50.0, 10.0, 50.0]);
}

#[test]
fn empty_series_maps_to_no_points() {
    assert!(to_points("QuTiP", &[]).expect("map").is_empty());
}

#[test]
fn missing_elapsed_time_is_malformed() {
    let err = to_points(
        "QuTiP",
        &[RawRecord {
            n: Some(10.0),
            t: None,
        }],
    )
    .expect_err("missing t must fail");
    match err {
        ChartError::MalformedRecord {
            series,
            index,
            field,
        } => {
            assert_eq!(series, "QuTiP");
            assert_eq!(index, 0);
            assert_eq!(field, "t");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_size_is_reported_before_time() {
    let err = to_points(
        "QuantumOptics.jl",
        &[RawRecord::new(1.0, 1.0), RawRecord::default()],
    )
    .expect_err("empty record must fail");
    assert!(matches!(
        err,
        ChartError::MalformedRecord {
            index: 1,
            field: "N",
            ..
        }
    ));
}

#[test]
fn records_parse_from_payload_json() {
    let records: Vec<RawRecord> =
        serde_json::from_str(r#"[{"N": 10, "t": 0.5, "extra": true}, {"N": 100}]"#)
            .expect("parse");
    assert_eq!(records[0], RawRecord::new(10.0, 0.5));
    assert!(to_points("QuTiP", &records).is_err());
}
