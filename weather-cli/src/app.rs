//! The lookup flow: cache check, concurrent fetch, aggregation, cache update.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;
use weather_core::{
    Cache, WeatherError, WeatherReading, WeatherReport, cache, fetch, provider::WeatherProvider,
};

/// Result of one weather lookup, ready to be formatted for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The cache was fresh and already held this city; no network calls.
    Cached(WeatherReading),
    /// At least one provider answered; the temperature is averaged.
    Fetched(WeatherReport),
}

/// Look up current weather for `city`, preferring a fresh cache entry.
///
/// Cache problems never abort the run: an unreadable cache is treated as a
/// miss and a failed save is logged after the result is already known. Only
/// zero successful provider calls is fatal.
pub async fn lookup(
    city: &str,
    cache_path: &Path,
    providers: &[Arc<dyn WeatherProvider>],
) -> Result<Outcome, WeatherError> {
    let cached = match Cache::load(cache_path) {
        Ok(cached) => cached,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable cache");
            None
        }
    };

    let now = Utc::now();
    if let Some(cached) = &cached {
        if cached.is_fresh(now, cache::default_ttl()) {
            if let Some(reading) = cached.lookup(city) {
                return Ok(Outcome::Cached(reading.clone()));
            }
        }
    }

    let readings = fetch::fetch_all(providers, city).await;
    let Some(report) = fetch::average(&readings) else {
        return Err(WeatherError::NoData {
            city: city.to_owned(),
        });
    };

    // The cache stores the first reading as-is, not the averaged report.
    let first = readings[0].clone();
    let mut cached = cached.unwrap_or_else(Cache::empty);
    cached.insert(city, first, now);
    if let Err(err) = cached.save(cache_path) {
        warn!(error = %err, "failed to persist cache");
    }

    Ok(Outcome::Fetched(report))
}
