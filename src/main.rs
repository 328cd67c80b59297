//! Symbol Audio - pre-renders spoken audio for communication-board symbols.
//!
//! Scans `public/symbols` for images, turns each file name into a short
//! spoken phrase and stores one MP3 clip per symbol in `public/audio`.
//! Existing clips are never regenerated, so the tool can be re-run freely.

mod config;
mod convert;
mod tts;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use config::{AppConfig, TTS_TLD};
use convert::RunSummary;
use tts::GoogleTts;

/// Log the totals of a finished run.
fn log_summary(summary: &RunSummary) {
    info!(
        "📊 {} generated ({} bytes), {} skipped, {} failed",
        summary.synthesized(),
        summary.bytes_written(),
        summary.skipped(),
        summary.failed()
    );

    for (item, cause) in summary.failures() {
        warn!("  {} (\"{}\"): {}", item.file_name, item.phrase, cause);
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let config = AppConfig::from_args();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if config.verbose { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })
        .context("Failed to build log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    info!("🔊 Symbol Audio v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(1);
    }

    let options = config.convert_options();
    config.log_config(&options);

    let mut synthesizer = GoogleTts::new(TTS_TLD).context("Failed to initialize speech synthesizer")?;

    info!("Starting audio generation for symbols...");
    let summary = convert::run(&options, &mut synthesizer).context("Audio generation aborted")?;
    log_summary(&summary);

    info!("✅ Audio generation completed.");
    Ok(())
}
