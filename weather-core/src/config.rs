use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::WeatherError;

/// API credentials for both providers, loaded once from `config.json` and
/// read-only for the rest of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub openweathermap_api_key: String,
    pub weatherapi_api_key: String,
}

impl Credentials {
    /// Load credentials from a JSON file.
    ///
    /// A missing, unreadable or malformed file is an error: without keys
    /// there is nothing useful the client can do.
    pub fn load(path: &Path) -> Result<Self, WeatherError> {
        let contents = fs::read_to_string(path).map_err(|source| WeatherError::Config {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        serde_json::from_str(&contents).map_err(|source| WeatherError::Config {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }
}
