//! Application configuration and CLI argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::convert::{ConvertOptions, Lexicon};

/// Language code sent with every synthesis request.
pub const TTS_LANGUAGE: &str = "en";

/// Top-level domain of the Google Translate host used for synthesis.
pub const TTS_TLD: &str = "com";

/// Symbol image directory, relative to the installation root.
const SYMBOLS_DIR: [&str; 2] = ["public", "symbols"];

/// Generated audio directory, relative to the installation root.
const AUDIO_DIR: [&str; 2] = ["public", "audio"];

/// Symbol audio generator configuration.
#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(name = "symbol-audio")]
#[command(author, version, about = "Generate one spoken audio clip per symbol image")]
#[command(
    long_about = "Generate one spoken audio clip per symbol image.\n\nImages are read from <ROOT>/public/symbols and clips are written to <ROOT>/public/audio. This layout under the root is fixed."
)]
pub struct AppConfig {
    /// Installation root; images are read from <ROOT>/public/symbols and clips written to <ROOT>/public/audio (fixed layout)
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse configuration from command line arguments.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Get the directory holding the symbol images.
    pub fn symbols_dir(&self) -> PathBuf {
        SYMBOLS_DIR.iter().fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Get the directory receiving the generated audio.
    pub fn audio_dir(&self) -> PathBuf {
        AUDIO_DIR.iter().fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Build the batch conversion options for this configuration.
    ///
    /// Uses the built-in pronunciation lexicon and the fixed synthesis language.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            source_dir: self.symbols_dir(),
            dest_dir: self.audio_dir(),
            language: TTS_LANGUAGE.to_string(),
            lexicon: Lexicon::builtin(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            anyhow::bail!("Installation root is not a directory: {}", self.root.display());
        }
        Ok(())
    }

    /// Log the current configuration together with the options used for the run.
    pub fn log_config(&self, options: &ConvertOptions) {
        info!("Configuration:");
        info!("  Root: {}", self.root.display());
        info!("  Symbols directory: {}", options.source_dir.display());
        info!("  Audio directory: {}", options.dest_dir.display());
        info!("  TTS language: {}", options.language);
        info!("  TTS host: translate.google.{}", TTS_TLD);
        if !options.lexicon.is_empty() {
            info!("  Pronunciation overrides: {}", options.lexicon.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_layout_under_root() {
        let config = AppConfig::parse_from(["symbol-audio", "--root", "/srv/board"]);
        assert_eq!(config.symbols_dir(), PathBuf::from("/srv/board/public/symbols"));
        assert_eq!(config.audio_dir(), PathBuf::from("/srv/board/public/audio"));
    }

    #[test]
    fn test_defaults_without_arguments() {
        let config = AppConfig::parse_from(["symbol-audio"]);
        assert_eq!(config.root, PathBuf::from("."));
        assert!(!config.verbose);

        let options = config.convert_options();
        assert_eq!(options.language, "en");
        assert_eq!(options.lexicon.lookup("McDonalds"), Some("McDonald's"));
    }

    #[test]
    fn test_help_states_fixed_layout() {
        use clap::CommandFactory;

        let help = AppConfig::command().render_long_help().to_string();
        assert!(help.contains("<ROOT>/public/symbols"));
        assert!(help.contains("<ROOT>/public/audio"));
        assert!(help.contains("fixed"));
    }

    #[test]
    fn test_validate_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig { root: dir.path().join("missing"), verbose: false };
        assert!(config.validate().is_err());

        let config = AppConfig { root: dir.path().to_path_buf(), verbose: false };
        assert!(config.validate().is_ok());
    }
}
