//! Mapping from symbol file names to speakable text.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::Lexicon;

/// Extension of every generated clip.
pub const AUDIO_EXTENSION: &str = "mp3";

/// Marker for source masters kept next to the resized symbols.
const ORIGINAL_MARKER: &str = "_original";

static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.(png|jpe?g|gif)$").expect("image extension pattern is valid"));

/// Text derived from a symbol file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakableText {
    /// Normalized name; identifies the output file.
    pub phrase: String,
    /// Text sent to the synthesizer.
    pub spoken: String,
}

impl SpeakableText {
    /// File name of the clip generated for this text.
    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.phrase, AUDIO_EXTENSION)
    }
}

/// Whether a file in the symbols directory should get a clip.
pub fn is_eligible(file_name: &str) -> bool {
    IMAGE_EXTENSION.is_match(file_name) && !file_name.contains(ORIGINAL_MARKER)
}

/// Derive speakable text from a file name.
///
/// The extension is dropped, underscores become spaces and the result is
/// trimmed. The lexicon only changes what is spoken, never the phrase used for
/// naming. The spoken text always ends with a period for a falling intonation.
pub fn normalize(file_name: &str, lexicon: &Lexicon) -> SpeakableText {
    let stem = Path::new(file_name).file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let phrase = stem.replace('_', " ").trim().to_string();

    let spoken = match lexicon.lookup(&phrase) {
        Some(replacement) => format!("{}.", replacement),
        None => format!("{}.", phrase),
    };

    SpeakableText { phrase, spoken }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscores_become_spaces() {
        let text = normalize("symbol_one.png", &Lexicon::builtin());
        assert_eq!(text.phrase, "symbol one");
        assert_eq!(text.spoken, "symbol one.");
        assert_eq!(text.output_file_name(), "symbol one.mp3");
    }

    #[test]
    fn test_lexicon_changes_speech_not_name() {
        let text = normalize("mcdonalds.png", &Lexicon::builtin());
        assert_eq!(text.spoken, "McDonald's.");
        assert_eq!(text.output_file_name(), "mcdonalds.mp3");

        let text = normalize("McDonalds.JPG", &Lexicon::builtin());
        assert_eq!(text.spoken, "McDonald's.");
        assert_eq!(text.output_file_name(), "McDonalds.mp3");
    }

    #[test]
    fn test_surrounding_separators_are_trimmed() {
        let text = normalize("_brush_teeth_.gif", &Lexicon::default());
        assert_eq!(text.phrase, "brush teeth");
        assert_eq!(text.spoken, "brush teeth.");
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        let text = normalize("get.dressed.jpeg", &Lexicon::default());
        assert_eq!(text.phrase, "get.dressed");
    }

    #[test]
    fn test_degenerate_name_normalizes_to_empty() {
        let text = normalize("___.png", &Lexicon::default());
        assert!(text.phrase.is_empty());
        assert_eq!(text.spoken, ".");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let lexicon = Lexicon::builtin();
        assert_eq!(normalize("bed_time.png", &lexicon), normalize("bed_time.png", &lexicon));
    }

    #[test]
    fn test_eligible_image_extensions() {
        for name in ["a.png", "a.PNG", "a.jpg", "a.Jpeg", "a.jpeg", "a.gif", "get dressed.png"] {
            assert!(is_eligible(name), "{} should be eligible", name);
        }
    }

    #[test]
    fn test_ineligible_names() {
        for name in ["a.webp", "a.svg", "notes.txt", "png", "a.png.bak", "cat_original.png", "cat_original_v2.jpg"] {
            assert!(!is_eligible(name), "{} should be skipped", name);
        }
    }
}
