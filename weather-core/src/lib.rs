//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Credentials loading for the two supported providers
//! - The local file cache with its global freshness window
//! - Provider adapters and the concurrent fetch-and-average logic
//!
//! It is used by `weather-cli`, but can also be reused by other binaries.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;

pub use cache::Cache;
pub use config::Credentials;
pub use error::WeatherError;
pub use model::{WeatherReading, WeatherReport};
pub use provider::{ProviderId, WeatherProvider, providers_from_credentials};
