use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

use crate::{
    model::{WeatherReading, WeatherReport},
    provider::WeatherProvider,
};

/// Query every provider concurrently and collect the readings that arrive
/// successfully, in completion order.
///
/// All calls are spawned together and all are joined; a failing provider is
/// logged and dropped without affecting the others. No retries, no
/// cancellation, no coordination between the calls.
pub async fn fetch_all(providers: &[Arc<dyn WeatherProvider>], city: &str) -> Vec<WeatherReading> {
    let readings = Arc::new(Mutex::new(Vec::with_capacity(providers.len())));
    let mut handles = Vec::with_capacity(providers.len());

    for provider in providers {
        let provider = Arc::clone(provider);
        let readings = Arc::clone(&readings);
        let city = city.to_owned();

        handles.push(tokio::spawn(async move {
            match provider.current_weather(&city).await {
                Ok(reading) => readings.lock().push(reading),
                Err(err) => {
                    warn!(provider = %provider.id(), error = %err, "dropping failed provider call");
                }
            }
        }));
    }

    for handle in handles {
        // A panicked provider task counts as one more failed provider.
        if let Err(err) = handle.await {
            warn!(error = %err, "provider task aborted");
        }
    }

    let mut readings = readings.lock();
    std::mem::take(&mut *readings)
}

/// Arithmetic mean of the temperatures, with the remaining fields taken from
/// the first reading. `None` when there is nothing to average.
pub fn average(readings: &[WeatherReading]) -> Option<WeatherReport> {
    let first = readings.first()?;
    let total: f64 = readings.iter().map(|r| r.temperature_c).sum();

    Some(WeatherReport {
        location: first.location.clone(),
        temperature_c: total / readings.len() as f64,
        humidity_pct: first.humidity_pct,
        description: first.description.clone(),
        sources: readings.len(),
    })
}
