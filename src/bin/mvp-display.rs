//! Run the MVP projection once against a URL or file and print the result.

use std::env;

use anyhow::Context;
use player_roster_back::mvp::{MvpSource, TextSurface, run_once};
use reqwest::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SOURCE_ENV: &str = "MVP_SOURCE";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source = env::args()
        .nth(1)
        .or_else(|| env::var(SOURCE_ENV).ok())
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| MvpSource::parse(&raw))
        .unwrap_or_default();

    let client = Client::builder()
        .build()
        .context("building HTTP client")?;

    let mut surface = TextSurface::with_all_regions();
    if run_once(&source, &client, &mut surface).await {
        print!("{surface}");
    }

    Ok(())
}
