//! Binary crate for the `weather` command-line tool.
//!
//! Fetches current weather for a city from two providers in parallel,
//! averages the temperatures, and caches the result for ten minutes.
//! Exits 0 on a cache hit or a successful fetch, 1 otherwise.

use clap::Parser;

mod app;
mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so the weather report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
