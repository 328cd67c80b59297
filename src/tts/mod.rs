//! Text-to-speech module.
//!
//! Defines the synthesis capability used by the batch converter and the
//! Google Translate backend that implements it.

mod google;
pub mod synthesizer;

pub use google::GoogleTts;
pub use synthesizer::SpeechSynthesizer;
