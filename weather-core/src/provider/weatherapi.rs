use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::WeatherReading;

use super::{ProviderId, REQUEST_TIMEOUT, WeatherProvider, truncate_body};

const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_owned())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for WeatherAPI.com")?;

        Ok(Self {
            api_key,
            base_url,
            http,
        })
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherReading> {
        let url = format!("{}/current.json", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city), ("aqi", "no")])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read WeatherAPI response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "WeatherAPI request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: WaResponse =
            serde_json::from_str(&body).context("Failed to parse WeatherAPI JSON")?;

        Ok(WeatherReading {
            location: parsed.location.name,
            temperature_c: parsed.current.temp_c,
            humidity_pct: parsed.current.humidity,
            description: parsed.current.condition.text,
        })
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    humidity: u8,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::WeatherApi
    }

    async fn current_weather(&self, city: &str) -> Result<WeatherReading> {
        self.fetch_current(city).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "location": { "name": "Kyiv", "country": "Ukraine", "localtime_epoch": 1717000000 },
        "current": {
            "temp_c": 8.1,
            "humidity": 77,
            "wind_kph": 11.2,
            "condition": { "text": "Partly cloudy", "code": 1003 }
        }
    }"#;

    #[test]
    fn parses_current_response() {
        let parsed: WaResponse = serde_json::from_str(SAMPLE).expect("sample must parse");
        assert_eq!(parsed.location.name, "Kyiv");
        assert_eq!(parsed.current.temp_c, 8.1);
        assert_eq!(parsed.current.humidity, 77);
        assert_eq!(parsed.current.condition.text, "Partly cloudy");
    }
}
