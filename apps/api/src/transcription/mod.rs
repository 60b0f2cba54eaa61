//! Speech-to-text boundary.
//!
//! The HTTP layer depends on the [`SpeechToText`] trait instead of a concrete
//! implementation, which keeps request handling decoupled from the hosted
//! model. Backends are constructed once at startup and carried in `AppState`
//! as `Arc<dyn SpeechToText>`.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{Config, TranscriberBackend};

pub mod fixed;
pub mod whisper_api;

#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("Audio I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Backend contract implemented by speech-to-text engines.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribes the audio file at `audio_path` into text.
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}

/// Builds the configured backend implementation.
pub fn build_backend(config: &Config) -> Arc<dyn SpeechToText> {
    match config.transcriber {
        TranscriberBackend::WhisperApi => Arc::new(whisper_api::WhisperApiTranscriber::new(
            config.groq_api_key.clone(),
        )),
        TranscriberBackend::Fixed => Arc::new(fixed::FixedTranscriber::default()),
    }
}
