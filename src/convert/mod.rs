//! Symbol-to-audio conversion pipeline.
//!
//! Ensures the output directory, normalizes each symbol file name into
//! speakable text and hands it to a synthesizer, writing each clip once.

mod batch;
mod dirs;
mod error;
mod lexicon;
mod normalize;

pub use batch::{ConvertOptions, RunSummary, run};
pub use lexicon::Lexicon;
