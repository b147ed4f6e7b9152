//! Integration tests for `fetch_boundary_set`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy path and every error variant
//! the fetch can propagate.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use geopulse_geo::{fetch_boundary_set, GeoError, UNKNOWN_COUNTRY};

fn countries_geojson() -> &'static str {
    r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "ADMIN": "Squareland" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[10,10],[20,10],[20,20],[10,20],[10,10]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "ADMIN": "Twinland" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[30,10],[40,10],[40,20],[30,20],[30,10]]],
                        [[[50,10],[60,10],[60,20],[50,20],[50,10]]]
                    ]
                }
            }
        ]
    }"#
}

#[tokio::test]
async fn fetch_parses_served_boundaries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(countries_geojson()))
        .mount(&server)
        .await;

    let url = format!("{}/countries.geojson", server.uri());
    let set = fetch_boundary_set(&url, 5).await.expect("fetch should succeed");

    assert_eq!(set.len(), 2);
    assert_eq!(set.resolve(15.0, 15.0), "Squareland");
    assert_eq!(set.resolve(55.0, 15.0), "Twinland");
    assert_eq!(set.resolve(0.0, 0.0), UNKNOWN_COUNTRY);
}

#[tokio::test]
async fn fetch_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries.geojson"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/countries.geojson", server.uri());
    let err = fetch_boundary_set(&url, 5).await.unwrap_err();
    assert!(matches!(err, GeoError::UnexpectedStatus { status: 404, .. }));
}

#[tokio::test]
async fn fetch_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not geojson"))
        .mount(&server)
        .await;

    let url = format!("{}/countries.geojson", server.uri());
    let err = fetch_boundary_set(&url, 5).await.unwrap_err();
    assert!(matches!(err, GeoError::Parse(_)));
}

#[tokio::test]
async fn fetch_rejects_empty_feature_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries.geojson"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{ "type": "FeatureCollection", "features": [] }"#),
        )
        .mount(&server)
        .await;

    let url = format!("{}/countries.geojson", server.uri());
    let err = fetch_boundary_set(&url, 5).await.unwrap_err();
    assert!(matches!(err, GeoError::EmptyBoundarySet));
}

#[tokio::test]
async fn fetch_times_out_on_slow_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries.geojson"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(countries_geojson())
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let url = format!("{}/countries.geojson", server.uri());
    let err = fetch_boundary_set(&url, 1).await.unwrap_err();
    match err {
        GeoError::Http(e) => assert!(e.is_timeout(), "expected timeout, got: {e}"),
        other => panic!("expected Http timeout error, got: {other:?}"),
    }
}
