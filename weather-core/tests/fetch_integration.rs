//! Integration tests for the provider adapters and the concurrent fetch,
//! backed by a wiremock HTTP server.

use std::sync::Arc;

use weather_core::fetch;
use weather_core::provider::{
    WeatherProvider, openweather::OpenWeatherMapProvider, weatherapi::WeatherApiProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OWM_BODY: &str = r#"{
    "name": "Kyiv",
    "main": { "temp": 10.0, "humidity": 81 },
    "weather": [ { "description": "broken clouds" } ]
}"#;

const WA_BODY: &str = r#"{
    "location": { "name": "Kyiv" },
    "current": { "temp_c": 20.0, "humidity": 70, "condition": { "text": "Sunny" } }
}"#;

async fn mock_openweathermap(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Kyiv"))
        .and(query_param("appid", "OWM_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mock_weatherapi(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "WA_KEY"))
        .and(query_param("q", "Kyiv"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn providers_against(server: &MockServer) -> Vec<Arc<dyn WeatherProvider>> {
    vec![
        Arc::new(
            OpenWeatherMapProvider::with_base_url("OWM_KEY".to_owned(), server.uri())
                .expect("client build"),
        ),
        Arc::new(
            WeatherApiProvider::with_base_url("WA_KEY".to_owned(), server.uri())
                .expect("client build"),
        ),
    ]
}

#[tokio::test]
async fn both_providers_succeed() {
    let server = MockServer::start().await;
    mock_openweathermap(
        &server,
        ResponseTemplate::new(200).set_body_raw(OWM_BODY, "application/json"),
    )
    .await;
    mock_weatherapi(
        &server,
        ResponseTemplate::new(200).set_body_raw(WA_BODY, "application/json"),
    )
    .await;

    let readings = fetch::fetch_all(&providers_against(&server), "Kyiv").await;
    assert_eq!(readings.len(), 2);

    let mut temps: Vec<f64> = readings.iter().map(|r| r.temperature_c).collect();
    temps.sort_by(f64::total_cmp);
    assert_eq!(temps, [10.0, 20.0]);

    let report = fetch::average(&readings).expect("two readings");
    assert_eq!(report.temperature_c, 15.0);
}

#[tokio::test]
async fn one_provider_down_keeps_the_other() {
    let server = MockServer::start().await;
    mock_openweathermap(&server, ResponseTemplate::new(500)).await;
    mock_weatherapi(
        &server,
        ResponseTemplate::new(200).set_body_raw(WA_BODY, "application/json"),
    )
    .await;

    let readings = fetch::fetch_all(&providers_against(&server), "Kyiv").await;
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].temperature_c, 20.0);
    assert_eq!(readings[0].description, "Sunny");
    assert_eq!(readings[0].humidity_pct, 70);

    let report = fetch::average(&readings).expect("one reading");
    assert_eq!(report.temperature_c, 20.0);
    assert_eq!(report.description, "Sunny");
}

#[tokio::test]
async fn malformed_body_drops_that_provider() {
    let server = MockServer::start().await;
    mock_openweathermap(
        &server,
        ResponseTemplate::new(200).set_body_raw("{ \"oops\": true }", "application/json"),
    )
    .await;
    mock_weatherapi(
        &server,
        ResponseTemplate::new(200).set_body_raw(WA_BODY, "application/json"),
    )
    .await;

    let readings = fetch::fetch_all(&providers_against(&server), "Kyiv").await;
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].location, "Kyiv");
    assert_eq!(readings[0].temperature_c, 20.0);
}

#[tokio::test]
async fn both_providers_down_yields_nothing() {
    let server = MockServer::start().await;
    mock_openweathermap(&server, ResponseTemplate::new(401)).await;
    mock_weatherapi(&server, ResponseTemplate::new(503)).await;

    let readings = fetch::fetch_all(&providers_against(&server), "Kyiv").await;
    assert!(readings.is_empty());
    assert!(fetch::average(&readings).is_none());
}
