//! Speech synthesis through the Google Translate web endpoint.
//!
//! Speaks through the same batchexecute RPC the Translate page uses for its
//! "listen" button. Responses carry base64 MP3 frames, so chunks can be
//! concatenated into a single playable file.

use std::sync::LazyLock;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose;
use regex::Regex;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::synthesizer::{MAX_CHUNK_CHARS, SpeechSynthesizer, SynthesisError, split_chunks};

/// RPC identifier of the Translate text-to-speech call.
const TTS_RPC: &str = "jQ1olc";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static AUDIO_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"jQ1olc","\[\\"(.*)\\"]"#).expect("audio pattern is valid"));

/// Text-to-speech client for Google Translate.
pub struct GoogleTts {
    client: Client, // Blocking HTTP client
    url: String,    // batchexecute endpoint for the chosen domain
}

impl GoogleTts {
    /// Create a new Google Translate TTS client.
    ///
    /// # Arguments
    /// * `tld` - Top-level domain of the Translate host (e.g. "com", "co.uk")
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(tld: &str) -> Result<Self, SynthesisError> {
        let url = format!("https://translate.google.{}/_/TranslateWebServerUi/data/batchexecute", tld);
        info!("Initializing Google Translate TTS at {}", url);

        let client = Client::builder().user_agent(USER_AGENT).timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { client, url })
    }

    /// Request audio for one chunk of text.
    fn request_chunk(&self, chunk: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        let body = package_rpc(chunk, language)?;

        let response = self.client.post(&self.url).header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SynthesisError::Status { status, body });
        }

        extract_audio(&response.text()?)
    }
}

impl SpeechSynthesizer for GoogleTts {
    fn synthesize(&mut self, text: &str, language: &str) -> Result<Vec<u8>, SynthesisError> {
        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let mut audio = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            debug!("Requesting chunk {}/{}: \"{}\"", i + 1, chunks.len(), chunk);
            audio.extend(self.request_chunk(chunk, language)?);
        }

        debug!("Received {} bytes of audio", audio.len());
        Ok(audio)
    }
}

/// Build the form body for a TTS RPC call.
///
/// A null speed asks for the normal speaking rate.
fn package_rpc(text: &str, language: &str) -> Result<String, SynthesisError> {
    let parameter = serde_json::to_string(&json!([text, language, Value::Null, "null"]))?;
    let rpc = serde_json::to_string(&json!([[[TTS_RPC, parameter, Value::Null, "generic"]]]))?;
    Ok(format!("f.req={}&", urlencoding::encode(&rpc)))
}

/// Collect and decode every audio frame in a batchexecute response.
fn extract_audio(body: &str) -> Result<Vec<u8>, SynthesisError> {
    let mut audio = Vec::new();

    for line in body.lines().filter(|line| line.contains(TTS_RPC)) {
        if let Some(captures) = AUDIO_PATTERN.captures(line) {
            audio.extend(general_purpose::STANDARD.decode(&captures[1])?);
        }
    }

    if audio.is_empty() {
        return Err(SynthesisError::NoAudio);
    }
    Ok(audio)
}
