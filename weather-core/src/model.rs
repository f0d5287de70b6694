use serde::{Deserialize, Serialize};

/// One provider's view of the current weather, adapted to a common field set.
///
/// The serde names match the on-disk cache format: `name`, `temp`,
/// `humidity`, `description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    #[serde(rename = "name")]
    pub location: String,
    #[serde(rename = "temp")]
    pub temperature_c: f64,
    #[serde(rename = "humidity")]
    pub humidity_pct: u8,
    pub description: String,
}

/// Aggregate over the readings of all providers that answered.
///
/// `temperature_c` is the arithmetic mean; the remaining fields are taken
/// from the first reading that arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub description: String,
    pub sources: usize,
}
