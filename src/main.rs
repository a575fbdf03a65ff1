mod config;

use anyhow::{Context, Result};
use config::Config;
use scryfall::{pacer_for, ScryfallClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let config = Config::load();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reqwest=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(&config)
}

fn run(config: &Config) -> Result<()> {
    tracing::info!(
        categories = ?config.categories,
        out_dir = %config.out_dir.display(),
        "Starting import"
    );

    let client = ScryfallClient::new(config.user_agent.clone());
    let mut pacer = pacer_for(config.delay());

    for &category in &config.categories {
        provider::import_and_write(
            &client,
            pacer.as_mut(),
            &config.api_base,
            category,
            &config.out_dir,
        )
        .inspect_err(|e| {
            if e.is_transient() {
                tracing::warn!(%category, error = %e, "Import failed on a transient error, rerun to retry");
            }
        })
        .with_context(|| format!("Failed to import category `{category}`"))?;
    }

    tracing::info!("Import complete");
    Ok(())
}
