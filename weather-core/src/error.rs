use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for the weather client.
///
/// Only [`WeatherError::Config`] and [`WeatherError::NoData`] are fatal to a
/// run; cache problems degrade to a cache miss (load) or a warning (write).
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to load config from {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to load cache from {path}")]
    Cache {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to write cache to {path}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("no provider returned weather data for '{city}'")]
    NoData { city: String },
}
