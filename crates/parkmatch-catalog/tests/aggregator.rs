//! Integration tests for `ParkAggregator` over real HTTP sources.
//!
//! Each test stands up a local `wiremock` server that plays both upstream
//! catalogs, so no real network traffic is made.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use parkmatch_catalog::{
    CatalogClient, CatalogError, DedupEngine, ParkAggregator, ParkSource, QueueTimesSource,
    ThemeParksListSource,
};

fn test_client() -> CatalogClient {
    CatalogClient::new(5, "parkmatch-test/0.1").expect("failed to build test CatalogClient")
}

/// Builds the production source pair (theme-parks first) against `server`.
fn aggregator_for(server: &MockServer) -> ParkAggregator {
    let client = test_client();
    let sources: Vec<Arc<dyn ParkSource>> = vec![
        Arc::new(ThemeParksListSource::new(
            client.clone(),
            &format!("{}/api/theme-parks", server.uri()),
        )),
        Arc::new(QueueTimesSource::new(
            client,
            &format!("{}/parks.json", server.uri()),
        )),
    ];
    ParkAggregator::new(sources, DedupEngine::default())
}

fn queue_times_groups() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Disney",
            "parks": [
                {"id": 4, "name": "Disneyland Park", "latitude": "48.8722", "longitude": "2.7758", "country": "France"},
                {"id": 28, "name": "Walt Disney Studios Park", "latitude": 48.8683, "longitude": 2.7806, "country": "France"}
            ]
        },
        {
            "id": 2,
            "name": "Independent",
            "parks": [
                {"id": 160, "name": "Efteling", "latitude": 51.6500, "longitude": 5.0497, "country": "Netherlands"}
            ]
        }
    ])
}

#[tokio::test]
async fn degrades_to_surviving_source_when_other_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/theme-parks"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/parks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queue_times_groups()))
        .expect(1)
        .mount(&server)
        .await;

    let parks = aggregator_for(&server).canonical_parks().await.unwrap();
    let ids: Vec<i64> = parks.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 28, 160]);
}

#[tokio::test]
async fn both_sources_failing_yields_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/theme-parks"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/parks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = aggregator_for(&server).canonical_parks().await.unwrap_err();
    assert!(matches!(err, CatalogError::EmptyResult), "got: {err:?}");
}

#[tokio::test]
async fn theme_parks_records_win_cross_source_duplicates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/theme-parks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 900, "name": "Efteling", "city": "Kaatsheuvel", "country": "Netherlands",
                 "coords": {"lat": "51.6502", "lng": "5.0499"}},
                {"id": 901, "name": "Nowhere Land", "coords": {"lat": "n/a", "lng": "4.0"}}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/parks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(queue_times_groups()))
        .mount(&server)
        .await;

    let parks = aggregator_for(&server).canonical_parks().await.unwrap();
    let ids: Vec<i64> = parks.iter().map(|p| p.id).collect();
    // 901 is skipped for its unparseable latitude; queue-times 160 folds into 900.
    assert_eq!(ids, vec![900, 4, 28]);
}

#[tokio::test]
async fn corrupt_coordinate_drops_the_whole_queue_times_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/theme-parks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": 900, "name": "Efteling", "coords": {"lat": "51.6502", "lng": "5.0499"}}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/parks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Good Park", "latitude": 10.0, "longitude": 10.0},
            {"id": 2, "name": "Bad Park", "latitude": "north", "longitude": 10.0}
        ])))
        .mount(&server)
        .await;

    let parks = aggregator_for(&server).canonical_parks().await.unwrap();
    let ids: Vec<i64> = parks.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![900]);
}
