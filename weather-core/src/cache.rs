use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, io, path::Path};

use crate::{error::WeatherError, model::WeatherReading};

/// How long a cache file counts as fresh.
pub fn default_ttl() -> Duration {
    Duration::minutes(10)
}

/// On-disk cache of last-known readings, keyed by city name as the user
/// typed it (case-sensitive).
///
/// One `timestamp` covers the whole cache: inserting any city refreshes the
/// freshness of every city. That matches the source behavior and is kept
/// deliberately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cache {
    pub data: HashMap<String, WeatherReading>,
    pub timestamp: DateTime<Utc>,
}

impl Cache {
    /// A cache with no entries and a timestamp so old it is never fresh.
    pub fn empty() -> Self {
        Self {
            data: HashMap::new(),
            timestamp: DateTime::<Utc>::MIN_UTC,
        }
    }

    /// Load the cache from a JSON file.
    ///
    /// A missing file is not an error and yields `Ok(None)`; an unreadable
    /// or malformed file is `Err`, which callers recover from by treating
    /// the run as a cache miss.
    pub fn load(path: &Path) -> Result<Option<Self>, WeatherError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(WeatherError::Cache {
                    path: path.to_path_buf(),
                    source: err.into(),
                });
            }
        };

        let cache = serde_json::from_str(&contents).map_err(|source| WeatherError::Cache {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        Ok(Some(cache))
    }

    /// True iff the whole cache was refreshed less than `ttl` ago.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.timestamp) < ttl
    }

    pub fn lookup(&self, city: &str) -> Option<&WeatherReading> {
        self.data.get(city)
    }

    /// Upsert the entry for `city` and bump the global timestamp.
    pub fn insert(&mut self, city: &str, reading: WeatherReading, now: DateTime<Utc>) {
        self.data.insert(city.to_owned(), reading);
        self.timestamp = now;
    }

    /// Persist the cache, replacing the whole file.
    ///
    /// Writes to a sibling temp file and renames it over the target so a
    /// failed write never leaves a truncated cache behind.
    pub fn save(&self, path: &Path) -> Result<(), WeatherError> {
        let write_err = |source: anyhow::Error| WeatherError::CacheWrite {
            path: path.to_path_buf(),
            source,
        };

        let json = serde_json::to_string_pretty(self).map_err(|e| write_err(e.into()))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| write_err(e.into()))?;
        fs::rename(&tmp, path).map_err(|e| write_err(e.into()))?;

        Ok(())
    }
}
