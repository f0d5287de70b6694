use anyhow::bail;
use clap::Parser;
use std::path::Path;

use crate::app::{self, Outcome};
use weather_core::{Credentials, providers_from_credentials};

const CONFIG_PATH: &str = "config.json";
const CACHE_PATH: &str = "cache.json";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Averaged current weather for a city")]
pub struct Cli {
    /// City name, passed to the providers as typed.
    #[arg(long)]
    pub city: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        if self.city.trim().is_empty() {
            bail!("City name must be specified");
        }

        let credentials = Credentials::load(Path::new(CONFIG_PATH))?;
        let providers = providers_from_credentials(&credentials)?;

        let outcome = app::lookup(&self.city, Path::new(CACHE_PATH), &providers).await?;
        print_outcome(&outcome);

        Ok(())
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Cached(reading) => {
            println!("Weather in {} (from cache):", reading.location);
            println!("Temperature: {:.2}°C", reading.temperature_c);
            println!("Humidity: {}%", reading.humidity_pct);
            println!("Description: {}", reading.description);
        }
        Outcome::Fetched(report) => {
            println!("Average Temperature in {}:", report.location);
            println!("Temperature: {:.2}°C", report.temperature_c);
        }
    }
}
