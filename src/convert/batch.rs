//! One-shot conversion of a symbols directory into audio clips.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use super::dirs::ensure_dir;
use super::error::ConvertError;
use super::lexicon::Lexicon;
use super::normalize::{SpeakableText, is_eligible, normalize};
use crate::tts::SpeechSynthesizer;

/// Inputs of a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub source_dir: PathBuf, // Symbol images
    pub dest_dir: PathBuf,   // Generated clips
    pub language: String,    // Language code passed to the synthesizer
    pub lexicon: Lexicon,    // Pronunciation overrides
}

/// Why an item produced no new clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A clip with this name is already on disk.
    Exists,
    /// An earlier file in this run normalized to the same name.
    Duplicate,
    /// Nothing speakable left after normalization.
    EmptyName,
}

/// Terminal state of one eligible file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Synthesized { bytes: usize },
    Skipped(SkipReason),
    Failed { cause: String },
}

/// Result of converting one eligible file.
#[derive(Debug, Clone)]
pub struct ItemReport {
    pub file_name: String,
    pub phrase: String,
    pub outcome: ItemOutcome,
}

/// Per-item results of a run, in processing order.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub items: Vec<ItemReport>,
}

impl RunSummary {
    pub fn synthesized(&self) -> usize {
        self.count(|outcome| matches!(outcome, ItemOutcome::Synthesized { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, ItemOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, ItemOutcome::Failed { .. }))
    }

    /// Total size of the clips written in this run.
    pub fn bytes_written(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item.outcome {
                ItemOutcome::Synthesized { bytes } => bytes,
                _ => 0,
            })
            .sum()
    }

    /// Items that failed, with their causes.
    pub fn failures(&self) -> impl Iterator<Item = (&ItemReport, &str)> {
        self.items.iter().filter_map(|item| match &item.outcome {
            ItemOutcome::Failed { cause } => Some((item, cause.as_str())),
            _ => None,
        })
    }

    fn count(&self, predicate: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|item| predicate(&item.outcome)).count()
    }
}

/// Generate a clip for every eligible symbol that does not have one yet.
///
/// Items are processed one at a time in file-name order. A failing item is
/// recorded and the run moves on; only an unusable destination or an
/// unreadable source directory aborts the run.
///
/// # Errors
/// Returns an error if the destination cannot be created or the source
/// directory cannot be listed.
pub fn run<S: SpeechSynthesizer + ?Sized>(options: &ConvertOptions, synthesizer: &mut S) -> Result<RunSummary, ConvertError> {
    ensure_dir(&options.dest_dir)?;

    let file_names = list_files(&options.source_dir)?;
    debug!("Found {} files in {}", file_names.len(), options.source_dir.display());

    let mut seen = HashSet::new();
    let mut summary = RunSummary::default();

    for file_name in file_names {
        if !is_eligible(&file_name) {
            debug!("Ignoring {}", file_name);
            continue;
        }

        let text = normalize(&file_name, &options.lexicon);
        let outcome = convert_item(&text, options, synthesizer, &mut seen);
        summary.items.push(ItemReport { file_name, phrase: text.phrase, outcome });
    }

    Ok(summary)
}

/// Drive one item from pending to its terminal state.
fn convert_item<S: SpeechSynthesizer + ?Sized>(text: &SpeakableText, options: &ConvertOptions, synthesizer: &mut S, seen: &mut HashSet<String>) -> ItemOutcome {
    if text.phrase.is_empty() {
        warn!("⚠️  Skipping file with empty name");
        return ItemOutcome::Skipped(SkipReason::EmptyName);
    }

    if !seen.insert(text.phrase.clone()) {
        info!("⏭️  Skipping {} - already handled in this run", text.phrase);
        return ItemOutcome::Skipped(SkipReason::Duplicate);
    }

    let output_path = options.dest_dir.join(text.output_file_name());
    if output_path.exists() {
        info!("⏭️  Skipping {} - audio file already exists", text.phrase);
        return ItemOutcome::Skipped(SkipReason::Exists);
    }

    info!("🎙️  Generating audio for: {}", text.spoken);
    let audio = match synthesizer.synthesize(&text.spoken, &options.language) {
        Ok(audio) => audio,
        Err(e) => {
            error!("❌ Error generating audio for '{}': {}", text.spoken, e);
            return ItemOutcome::Failed { cause: e.to_string() };
        }
    };

    match write_once(&options.dest_dir, &output_path, &audio) {
        Ok(true) => {
            info!("💾 Audio saved to: {}", output_path.display());
            ItemOutcome::Synthesized { bytes: audio.len() }
        }
        Ok(false) => {
            info!("⏭️  Skipping {} - audio file appeared during synthesis", text.phrase);
            ItemOutcome::Skipped(SkipReason::Exists)
        }
        Err(e) => {
            error!("❌ Error saving audio for '{}': {}", text.spoken, e);
            ItemOutcome::Failed { cause: e.to_string() }
        }
    }
}

/// List regular files directly under `dir`, sorted by name.
fn list_files(dir: &Path) -> Result<Vec<String>, ConvertError> {
    let read_error = |source: io::Error| ConvertError::ReadSource { path: dir.to_path_buf(), source };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if !entry.path().is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => warn!("⚠️  Skipping non UTF-8 file name: {}", name.to_string_lossy()),
        }
    }

    names.sort();
    Ok(names)
}

/// Write `bytes` to `path` unless something is already there.
///
/// The data lands in a temporary file next to the target and is moved into
/// place without replacing an existing file, so readers never see a partial
/// clip. Returns `false` if the target already existed.
fn write_once(dir: &Path, path: &Path, bytes: &[u8]) -> io::Result<bool> {
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;

    match file.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error),
    }
}
