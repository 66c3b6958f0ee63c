pub mod dump;
pub mod settings;

use std::io::Write;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{ExtractionReport, VocabularyExtractor};

use crate::dump::JsonPages;
use crate::settings::Settings;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env()?;

    tracing::info!("Loading fragment dump {}", settings.input.display());
    let pages = JsonPages::load(&settings.input)
        .await
        .with_context(|| format!("reading {}", settings.input.display()))?;

    let extractor = VocabularyExtractor::new(settings.config.clone())?;
    let report = extractor
        .extract_source(&pages)
        .await
        .context("document could not be decoded")?;

    check_yield(&report, settings.min_items)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report.items)?;
    writeln!(out)?;
    Ok(())
}

/// Fail when the document produced too few entries to be a vocabulary list.
pub fn check_yield(report: &ExtractionReport, min_items: usize) -> anyhow::Result<()> {
    if !report.meets_minimum(min_items) {
        anyhow::bail!(
            "found {} vocabulary entries, expected at least {}; is this a vocabulary list?",
            report.len(),
            min_items
        );
    }
    Ok(())
}
