use crate::{
    config::Credentials,
    model::WeatherReading,
    provider::{openweather::OpenWeatherMapProvider, weatherapi::WeatherApiProvider},
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc, time::Duration};

pub mod openweather;
pub mod weatherapi;

/// Per-request timeout for provider calls. The original client inherited the
/// platform default (no bound); an explicit bound avoids an indefinite hang.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeatherMap,
    WeatherApi,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeatherMap => "openweathermap",
            ProviderId::WeatherApi => "weatherapi",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeatherMap, ProviderId::WeatherApi]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of current weather for a named city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    async fn current_weather(&self, city: &str) -> anyhow::Result<WeatherReading>;
}

/// Build the fixed two-provider set from loaded credentials.
pub fn providers_from_credentials(
    credentials: &Credentials,
) -> anyhow::Result<Vec<Arc<dyn WeatherProvider>>> {
    Ok(vec![
        Arc::new(OpenWeatherMapProvider::new(
            credentials.openweathermap_api_key.clone(),
        )?),
        Arc::new(WeatherApiProvider::new(
            credentials.weatherapi_api_key.clone(),
        )?),
    ])
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
