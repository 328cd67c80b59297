//! Speech synthesis capability and shared text helpers.

use thiserror::Error;

/// Longest text, in characters, a single synthesis request may carry.
pub const MAX_CHUNK_CHARS: usize = 100;

/// Errors raised while turning text into audio.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("no text to synthesize")]
    EmptyText,

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("no audio stream in response")]
    NoAudio,

    #[error("invalid audio payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("invalid request payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Something that turns text into encoded audio.
///
/// Implementations return complete MP3 bytes for `text` spoken in `language`
/// at normal rate, or fail without side effects.
pub trait SpeechSynthesizer {
    /// Synthesize `text` spoken in `language`.
    ///
    /// # Errors
    /// Returns an error if the text is empty or the engine cannot produce audio.
    fn synthesize(&mut self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError>;
}

/// Split text into request-sized chunks.
///
/// Text that fits in `max_chars` is sent whole. Longer text is split at
/// sentence boundaries, sentences longer than `max_chars` are packed word by
/// word, and single words longer than `max_chars` are cut.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if trimmed.chars().count() <= max_chars {
        return vec![trimmed.to_string()];
    }

    let mut chunks = Vec::new();

    for sentence in split_sentences(text) {
        if sentence.chars().count() <= max_chars {
            chunks.push(sentence);
            continue;
        }

        let mut current = String::new();
        for word in sentence.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current.chars().count();

            if current_len > 0 && current_len + 1 + word_len <= max_chars {
                current.push(' ');
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }

            if word_len <= max_chars {
                current.push_str(word);
            } else {
                // Hard-split words that cannot fit on their own
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(max_chars) {
                    chunks.push(piece.iter().collect());
                }
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }
    }

    chunks
}

/// Split text into trimmed sentences, keeping their punctuation.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);

        if c == '.' || c == '!' || c == '?' || c == '\n' {
            let trimmed = current.trim().to_string();
            if !trimmed.is_empty() {
                sentences.push(trimmed);
            }
            current.clear();
        }
    }

    let trimmed = current.trim().to_string();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_phrase_is_one_chunk() {
        assert_eq!(split_chunks("symbol one.", MAX_CHUNK_CHARS), vec!["symbol one."]);
    }

    #[test]
    fn test_blank_text_has_no_chunks() {
        assert!(split_chunks("   ", MAX_CHUNK_CHARS).is_empty());
        assert!(split_chunks("", MAX_CHUNK_CHARS).is_empty());
    }

    #[test]
    fn test_dotted_phrase_under_limit_stays_whole() {
        assert_eq!(split_chunks("get.dressed.", MAX_CHUNK_CHARS), vec!["get.dressed."]);
        assert_eq!(split_chunks("a.m. routine.", MAX_CHUNK_CHARS), vec!["a.m. routine."]);
        assert_eq!(split_chunks("Get dressed. Brush teeth!", MAX_CHUNK_CHARS), vec!["Get dressed. Brush teeth!"]);
    }

    #[test]
    fn test_sentences_end_chunks_over_limit() {
        let chunks = split_chunks("Get dressed. Brush teeth!", 20);
        assert_eq!(chunks, vec!["Get dressed.", "Brush teeth!"]);
    }

    #[test]
    fn test_long_sentence_packs_words() {
        let chunks = split_chunks("one two three four five", 9);
        assert_eq!(chunks, vec!["one two", "three", "four five"]);
        assert!(chunks.iter().all(|c| c.chars().count() <= 9));
    }

    #[test]
    fn test_oversized_word_is_cut() {
        let chunks = split_chunks("abcdefghij", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }
}
