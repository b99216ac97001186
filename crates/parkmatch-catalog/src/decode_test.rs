use serde_json::json;

use super::*;

// -----------------------------------------------------------------------
// decode_queue_times: shape selection
// -----------------------------------------------------------------------

#[test]
fn decodes_array_of_groups() {
    let body = json!([
        {
            "id": 1,
            "name": "Cedar Fair",
            "parks": [
                { "id": 10, "name": "Cedar Point", "latitude": "41.4822", "longitude": "-82.6835",
                  "country": "United States", "continent": "North America" },
                { "id": 11, "name": "Kings Island", "latitude": 39.3447, "longitude": -84.2686 }
            ]
        },
        { "name": null, "parks": [] }
    ])
    .to_string();

    let records = decode_queue_times(&body, "test").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Cedar Point");
    assert!((records[0].latitude - 41.4822).abs() < 1e-9);
    assert_eq!(records[0].country.as_deref(), Some("United States"));
    assert_eq!(records[1].id, 11);
    assert!((records[1].longitude + 84.2686).abs() < 1e-9);
}

#[test]
fn decodes_flat_array() {
    let body = json!([
        { "id": 5, "name": "Efteling", "lat": 51.6500, "lng": 5.0497 }
    ])
    .to_string();

    let records = decode_queue_times(&body, "test").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Efteling");
}

#[test]
fn decodes_wrapped_object() {
    let body = json!({
        "parks": [ { "id": 6, "name": "Phantasialand", "latitude": 50.7999, "lon": "6.8788" } ]
    })
    .to_string();

    let records = decode_queue_times(&body, "test").unwrap();
    assert_eq!(records.len(), 1);
    assert!((records[0].longitude - 6.8788).abs() < 1e-9);
}

#[test]
fn rejects_body_matching_no_shape() {
    let body = json!({ "results": [] }).to_string();
    let err = decode_queue_times(&body, "test").unwrap_err();
    assert!(
        matches!(err, CatalogError::Parse { .. }),
        "expected Parse, got: {err:?}"
    );
}

#[test]
fn rejects_non_json_body() {
    let err = decode_queue_times("<html>maintenance</html>", "test").unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

// -----------------------------------------------------------------------
// decode_queue_times: coordinate tolerance
// -----------------------------------------------------------------------

#[test]
fn falls_back_when_primary_key_is_unparseable() {
    let body = json!([
        { "id": 1, "name": "Liseberg", "latitude": "n/a", "lat": "57.6953",
          "longitude": null, "lng": 11.9925 }
    ])
    .to_string();

    let records = decode_queue_times(&body, "test").unwrap();
    assert!((records[0].latitude - 57.6953).abs() < 1e-9);
    assert!((records[0].longitude - 11.9925).abs() < 1e-9);
}

#[test]
fn wrongly_typed_optional_fields_are_dropped() {
    let body = json!([
        { "id": 1, "name": "Tivoli", "latitude": 55.6737, "longitude": 12.5681,
          "slug": 42, "country": ["Denmark"] }
    ])
    .to_string();

    let records = decode_queue_times(&body, "test").unwrap();
    assert!(records[0].slug.is_none());
    assert!(records[0].country.is_none());
}

// One unusable coordinate fails the whole batch rather than skipping the
// offending record. Pinned here so a switch to per-record skipping is a
// visible behaviour change.
#[test]
fn one_missing_coordinate_fails_the_whole_batch() {
    let body = json!([
        { "id": 1, "name": "Good Park", "latitude": 10.0, "longitude": 10.0 },
        { "id": 2, "name": "Bad Park", "latitude": 10.0 }
    ])
    .to_string();

    let err = decode_queue_times(&body, "test").unwrap_err();
    match err {
        CatalogError::DataCorrupted { context, reason } => {
            assert!(context.contains("Bad Park"), "context: {context}");
            assert!(reason.contains("longitude"), "reason: {reason}");
        }
        other => panic!("expected DataCorrupted, got: {other:?}"),
    }
}

#[test]
fn out_of_range_latitude_is_corrupted() {
    let body = json!([
        { "id": 1, "name": "Nowhere", "latitude": 123.0, "longitude": 10.0 }
    ])
    .to_string();

    let err = decode_queue_times(&body, "test").unwrap_err();
    assert!(matches!(err, CatalogError::DataCorrupted { .. }));
}

// -----------------------------------------------------------------------
// theme_parks_record
// -----------------------------------------------------------------------

fn theme_parks_record_from(value: serde_json::Value) -> ThemeParksRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn theme_parks_record_parses_string_coordinates() {
    let record = theme_parks_record_from(json!({
        "id": 3, "name": "Futuroscope", "city": "Chasseneuil-du-Poitou",
        "country": "France", "coords": { "lat": "46.6697", "lng": "0.3681" }
    }));
    let raw = theme_parks_record(record).unwrap();
    assert_eq!(raw.id, 3);
    assert!((raw.latitude - 46.6697).abs() < 1e-9);
    assert_eq!(raw.country.as_deref(), Some("France"));
    assert!(raw.slug.is_none());
}

#[test]
fn theme_parks_record_skips_missing_or_bad_coordinates() {
    for coords in [
        json!(null),
        json!({ "lat": "46.6", "lng": null }),
        json!({ "lat": "abc", "lng": "0.3" }),
        json!({ "lat": "NaN", "lng": "0.3" }),
        json!({ "lat": "46.6", "lng": "200" }),
    ] {
        let record = theme_parks_record_from(json!({ "id": 1, "name": "X", "coords": coords.clone() }));
        assert!(theme_parks_record(record).is_none(), "coords: {coords}");
    }
}
