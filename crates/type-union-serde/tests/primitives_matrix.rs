use chrono::{DateTime, Utc};
use serde_json::json;
use type_union_serde::{AllOf, AnyOf, OneOf, TypeUnion, UnionKind, UnionResolver};

fn date(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

#[test]
fn one_of_int_or_date_matrix() {
    let n: OneOf<i64, DateTime<Utc>> = serde_json::from_str("42").unwrap();
    assert_eq!(n.into_inner(), TypeUnion::Left(42));

    let d: OneOf<i64, DateTime<Utc>> =
        serde_json::from_str("\"2020-01-01T14:00:00Z\"").unwrap();
    assert_eq!(
        d.into_inner(),
        TypeUnion::Right(date("2020-01-01T14:00:00Z"))
    );

    assert!(serde_json::from_str::<OneOf<i64, DateTime<Utc>>>("{\"OneOf\":true}").is_err());
    assert!(serde_json::from_str::<OneOf<i64, DateTime<Utc>>>("true").is_err());
}

#[test]
fn any_of_matrix() {
    let s: AnyOf<i64, String> = serde_json::from_str("\"kickban\"").unwrap();
    assert_eq!(s.into_inner(), TypeUnion::Right("kickban".to_string()));

    // serde_json never cross-decodes a number as a string or vice versa.
    let n: AnyOf<i64, String> = serde_json::from_str("2").unwrap();
    assert_eq!(n.into_inner(), TypeUnion::Left(2));
    let q: AnyOf<i64, String> = serde_json::from_str("\"2\"").unwrap();
    assert_eq!(q.into_inner(), TypeUnion::Right("2".to_string()));

    // An integral number is a valid i64 and a valid f64.
    let b: AnyOf<i64, f64> = serde_json::from_str("2020").unwrap();
    assert_eq!(b.into_inner(), TypeUnion::Both(2020, 2020.0));
    let f: AnyOf<i64, f64> = serde_json::from_str("2020.5").unwrap();
    assert_eq!(f.into_inner(), TypeUnion::Right(2020.5));

    let ds: AnyOf<DateTime<Utc>, String> =
        serde_json::from_str("\"2020-01-01T00:00:00Z\"").unwrap();
    assert_eq!(
        ds.into_inner(),
        TypeUnion::Both(
            date("2020-01-01T00:00:00Z"),
            "2020-01-01T00:00:00Z".to_string()
        )
    );
}

#[test]
fn one_of_rejects_ambiguity_with_a_pointed_message() {
    let err = serde_json::from_str::<OneOf<i64, f64>>("2020").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("use anyOf"), "message: {message}");
    assert!(message.contains("i64") && message.contains("f64"), "message: {message}");
}

#[test]
fn all_of_requires_both_sides() {
    let both: AllOf<i64, f64> = serde_json::from_str("7").unwrap();
    assert_eq!(both.into_inner(), TypeUnion::Both(7, 7.0));

    let err = serde_json::from_str::<AllOf<i64, f64>>("7.5").unwrap_err();
    assert!(err.to_string().contains("allOf"));
}

#[test]
fn no_match_aggregates_both_causes() {
    let resolver = UnionResolver::<i64, DateTime<Utc>>::new(UnionKind::OneOf);
    let err = resolver.resolve(&json!(true)).unwrap_err();
    let (left, right) = err.causes();
    assert!(left.is_some() && right.is_some());
    let message = err.to_string();
    assert!(message.contains("either"), "message: {message}");
    assert!(message.contains("oneOf"), "message: {message}");
}

#[test]
fn resolution_is_deterministic() {
    let resolver = UnionResolver::<i64, f64>::new(UnionKind::AnyOf);
    let value = json!(2020);
    assert_eq!(
        resolver.resolve(&value).unwrap(),
        resolver.resolve(&value).unwrap()
    );
}

#[test]
fn every_mode_applies_the_table_to_a_left_only_value() {
    // 42 is usable as i64 only; a bare number is never a DateTime.
    let one = UnionResolver::<i64, DateTime<Utc>>::new(UnionKind::OneOf);
    let any = UnionResolver::<i64, DateTime<Utc>>::new(UnionKind::AnyOf);
    let all = UnionResolver::<i64, DateTime<Utc>>::new(UnionKind::AllOf);
    let value = json!(42);
    assert_eq!(one.resolve(&value).unwrap(), TypeUnion::Left(42));
    assert_eq!(any.resolve(&value).unwrap(), TypeUnion::Left(42));
    assert!(all.resolve(&value).is_err());
}
