//! Speech synthesis.
//!
//! [`SpeechSynthesizer`] is the seam: text in, MP3 bytes out. [`GoogleTts`]
//! speaks through the Google Translate TTS endpoint, which only accepts
//! short inputs, so longer text is split into chunks and the returned MP3
//! frames are concatenated.

use std::path::Path;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::options::SpeechOptions;
use crate::patterns::SPEECH_PAUSE;
use crate::text::{char_len, normalize_whitespace};

/// Errors from speech synthesis.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Nothing speakable in the input.
    #[error("no speakable text")]
    EmptyText,

    /// The TTS host could not be addressed.
    #[error("invalid TTS endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// Connection, timeout or body read failure.
    #[error("speech request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("speech service returned {status} for chunk {index} of {total}")]
    Status {
        status: StatusCode,
        index: usize,
        total: usize,
    },

    /// Writing the audio file failed.
    #[error("could not write audio: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns text into audio.
pub trait SpeechSynthesizer {
    /// Synthesize `text`, returning encoded audio bytes.
    fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError>;
}

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Cuts after the last pause punctuation that fits, else at the last
/// whitespace, else mid-word. Chunks with no letters or digits are dropped.
#[must_use]
pub fn split_for_speech(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let normalized = normalize_whitespace(text);
    let mut rest = normalized.as_str();
    let mut chunks = Vec::new();

    while char_len(rest) > max_chars {
        let window_end = rest
            .char_indices()
            .nth(max_chars)
            .map_or(rest.len(), |(i, _)| i);
        let window = &rest[..window_end];

        let cut = SPEECH_PAUSE
            .find_iter(window)
            .last()
            .map(|m| m.end())
            .or_else(|| window.rfind(char::is_whitespace).filter(|&i| i > 0))
            .unwrap_or(window_end);

        push_chunk(&mut chunks, &rest[..cut]);
        rest = rest[cut..].trim_start();
    }
    push_chunk(&mut chunks, rest);

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if piece.chars().any(char::is_alphanumeric) {
        chunks.push(piece.to_string());
    }
}

/// Google Translate text-to-speech client.
#[derive(Debug, Clone)]
pub struct GoogleTts {
    client: Client,
    options: SpeechOptions,
}

impl GoogleTts {
    pub fn new(options: SpeechOptions) -> Result<Self, SpeechError> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self { client, options })
    }

    /// Request URL for chunk `index` (zero-based) of `total`.
    pub fn request_url(&self, chunk: &str, index: usize, total: usize) -> Result<Url, SpeechError> {
        let base = format!("https://translate.google.{}/translate_tts", self.options.tld);
        let speed = if self.options.slow { "0.3" } else { "1" };
        let total = total.to_string();
        let index = index.to_string();
        let textlen = char_len(chunk).to_string();
        let url = Url::parse_with_params(
            &base,
            [
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", self.options.lang.as_str()),
                ("client", "tw-ob"),
                ("ttsspeed", speed),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", textlen.as_str()),
            ],
        )?;
        Ok(url)
    }
}

impl SpeechSynthesizer for GoogleTts {
    fn synthesize(&self, text: &str) -> Result<Vec<u8>, SpeechError> {
        let chunks = split_for_speech(text, self.options.max_chunk_chars);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let total = chunks.len();
        tracing::info!(chunks = total, lang = %self.options.lang, "synthesizing speech");

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let url = self.request_url(chunk, index, total)?;
            let response = self.client.get(url).send()?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), index, total, "speech chunk rejected");
                return Err(SpeechError::Status {
                    status,
                    index,
                    total,
                });
            }

            let bytes = response.bytes()?;
            tracing::debug!(index, bytes = bytes.len(), "speech chunk received");
            audio.extend_from_slice(&bytes);
        }

        Ok(audio)
    }
}

/// Write synthesized audio to `path`.
pub fn save_audio(path: &Path, audio: &[u8]) -> Result<(), SpeechError> {
    std::fs::write(path, audio)?;
    tracing::info!(path = %path.display(), bytes = audio.len(), "audio written");
    Ok(())
}
