//! Tests for stats/aggregate

use super::*;
use crate::record::JsonRecord;
use crate::stats::parser::parse_stat;
use crate::stats::resolver::resolve_type;
use proptest::prelude::*;
use serde_json::{Value, json};

fn records(values: Vec<Value>) -> Vec<JsonRecord> {
    values
        .into_iter()
        .map(|v| match v {
            Value::Object(map) => JsonRecord::new(map),
            _ => panic!("fixture must be an object"),
        })
        .collect()
}

/// Parse, resolve against the first record, then aggregate
fn stat(items: &[JsonRecord], expr: &str) -> Result<StatValue, SummarizeError> {
    let mut descriptor = parse_stat(expr).unwrap();
    if let Some(sample) = items.first() {
        descriptor = resolve_type(&descriptor, sample).unwrap();
    }
    aggregate(items, &descriptor)
}

fn library() -> Vec<JsonRecord> {
    records(vec![
        json!({"title": "a", "bitrate": 128, "length": 200.5, "lyrics": "la la la", "genre": "Rock"}),
        json!({"title": "bb", "bitrate": 256, "length": 100.0, "lyrics": "la", "genre": "Rock"}),
        json!({"title": "ccc", "bitrate": 256, "length": 150.5, "lyrics": "", "genre": "Pop"}),
    ])
}

#[test]
fn test_numeric_aggregators() {
    let items = library();
    assert_eq!(stat(&items, "min|bitrate"), Ok(StatValue::Int(128)));
    assert_eq!(stat(&items, "max|bitrate"), Ok(StatValue::Int(256)));
    assert_eq!(stat(&items, "sum|bitrate"), Ok(StatValue::Int(640)));
    assert_eq!(stat(&items, "range|bitrate"), Ok(StatValue::Int(128)));
    assert_eq!(stat(&items, "count|bitrate"), Ok(StatValue::Int(3)));

    let avg = stat(&items, "avg|bitrate").unwrap();
    assert!((avg.as_f64() - 640.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_float_field() {
    let items = library();
    assert_eq!(stat(&items, "sum|length"), Ok(StatValue::Float(451.0)));
    assert_eq!(stat(&items, "range|length"), Ok(StatValue::Float(100.5)));
    assert_eq!(stat(&items, "min|length"), Ok(StatValue::Float(100.0)));
}

#[test]
fn test_unique_deduplicates_before_aggregation() {
    let items = library();
    assert_eq!(stat(&items, "count:unique|bitrate"), Ok(StatValue::Int(2)));
    assert_eq!(stat(&items, "unique|bitrate"), Ok(StatValue::Int(384)));
    assert_eq!(stat(&items, "count:unique|genre"), Ok(StatValue::Int(2)));
}

#[test]
fn test_string_fields_use_length_by_default() {
    let items = library();
    assert_eq!(stat(&items, "sum|title"), Ok(StatValue::Int(6)));
    assert_eq!(stat(&items, "max|title"), Ok(StatValue::Int(3)));
}

#[test]
fn test_words_converter() {
    let items = library();
    // "la la la" -> 3, "la" -> 1, "" -> 1
    assert_eq!(stat(&items, "words|lyrics"), Ok(StatValue::Int(5)));
    assert_eq!(stat(&items, "range:words|lyrics"), Ok(StatValue::Int(2)));
}

#[test]
fn test_count_ignores_converter() {
    let items = library();
    assert_eq!(stat(&items, "count:words|lyrics"), Ok(StatValue::Int(3)));
}

#[test]
fn test_avg_of_strings_is_float() {
    let items = library();
    assert_eq!(stat(&items, "avg:len|title"), Ok(StatValue::Float(2.0)));
}

#[test]
fn test_plain_count_reads_no_field() {
    let items = records(vec![json!({"year": 2000}), json!({})]);
    assert_eq!(
        aggregate(&items, &StatDescriptor::count()),
        Ok(StatValue::Int(2))
    );
}

#[test]
fn test_missing_field_is_reported() {
    let items = records(vec![json!({"bitrate": 128}), json!({"title": "x"})]);
    let descriptor = parse_stat("sum|bitrate").unwrap();
    assert_eq!(
        aggregate(&items, &descriptor),
        Err(SummarizeError::UnknownField {
            field: "bitrate".to_string()
        })
    );
}

#[test]
fn test_empty_collection() {
    let items: Vec<JsonRecord> = Vec::new();
    for expr in ["min|bitrate", "max|bitrate", "range|bitrate", "avg|bitrate"] {
        let result = aggregate(&items, &parse_stat(expr).unwrap());
        assert!(
            matches!(result, Err(SummarizeError::EmptyCollection { .. })),
            "{} should fail on empty input, got {:?}",
            expr,
            result
        );
    }

    assert_eq!(
        aggregate(&items, &parse_stat("sum|bitrate").unwrap()),
        Ok(StatValue::Int(0))
    );
    assert_eq!(
        aggregate(&items, &StatDescriptor::count()),
        Ok(StatValue::Int(0))
    );
}

#[test]
fn test_integer_overflow_promotes_to_float() {
    let items = records(vec![
        json!({"size": i64::MAX}),
        json!({"size": 1}),
    ]);
    assert_eq!(stat(&items, "sum|size"), Ok(StatValue::Float(i64::MAX as f64 + 1.0)));

    let items = records(vec![
        json!({"size": i64::MIN}),
        json!({"size": i64::MAX}),
    ]);
    match stat(&items, "range|size") {
        Ok(StatValue::Float(x)) => assert!((x - 2f64.powi(64)).abs() < 1e4),
        other => panic!("expected float range, got {:?}", other),
    }
}

#[test]
fn test_large_integers_stay_integral_without_overflow() {
    let items = records(vec![
        json!({"size": i64::MAX - 1}),
        json!({"size": 1}),
    ]);
    assert_eq!(stat(&items, "sum|size"), Ok(StatValue::Int(i64::MAX)));
    assert_eq!(stat(&items, "range|size"), Ok(StatValue::Int(i64::MAX - 2)));
}

#[test]
fn test_aggregate_over_group_references() {
    let items = library();
    let group: Vec<&JsonRecord> = items.iter().filter(|r| r.field("genre") == Some("Rock".into())).collect();
    assert_eq!(
        aggregate(&group, &parse_stat("sum|bitrate").unwrap()),
        Ok(StatValue::Int(384))
    );
}

fn bitrate_records(bitrates: &[i64]) -> Vec<JsonRecord> {
    records(bitrates.iter().map(|b| json!({"bitrate": b})).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_count_equals_record_count(bitrates in prop::collection::vec(0i64..1000, 1..50)) {
        let items = bitrate_records(&bitrates);
        prop_assert_eq!(
            aggregate(&items, &StatDescriptor::count()),
            Ok(StatValue::Int(bitrates.len() as i64))
        );
    }

    #[test]
    fn prop_reductions_are_order_independent(
        mut bitrates in prop::collection::vec(0i64..1000, 1..50)
    ) {
        let forward = bitrate_records(&bitrates);
        bitrates.reverse();
        let backward = bitrate_records(&bitrates);

        for expr in ["min|bitrate", "max|bitrate", "sum|bitrate", "range|bitrate", "count:unique|bitrate"] {
            let descriptor = parse_stat(expr).unwrap();
            prop_assert_eq!(
                aggregate(&forward, &descriptor),
                aggregate(&backward, &descriptor),
                "{} changed with input order",
                expr
            );
        }
    }

    #[test]
    fn prop_avg_lies_within_min_and_max(bitrates in prop::collection::vec(0i64..1000, 1..50)) {
        let items = bitrate_records(&bitrates);
        let avg = aggregate(&items, &parse_stat("avg|bitrate").unwrap()).unwrap().as_f64();
        let min = *bitrates.iter().min().unwrap() as f64;
        let max = *bitrates.iter().max().unwrap() as f64;
        prop_assert!(min <= avg && avg <= max);
    }

    #[test]
    fn prop_unique_count_matches_distinct_values(bitrates in prop::collection::vec(0i64..20, 1..50)) {
        let items = bitrate_records(&bitrates);
        let mut distinct = bitrates.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(
            aggregate(&items, &parse_stat("count:unique|bitrate").unwrap()),
            Ok(StatValue::Int(distinct.len() as i64))
        );
    }
}
