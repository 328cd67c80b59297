//! Configuration module for the symbol audio generator.
//!
//! Provides CLI argument parsing and the fixed directory layout.

#[allow(clippy::module_inception)]
mod config;

pub use config::{AppConfig, TTS_TLD};
