//! Hosted Whisper transcription backend.

use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{SpeechToText, TranscriptionError};

const TRANSCRIPTION_API_URL: &str = "https://api.groq.com/openai/v1/audio/transcriptions";
/// Whisper auto-detects language, which handles code-mixed Hindi-English
/// speech without a language hint.
const WHISPER_MODEL: &str = "whisper-large-v3";

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Uploads the audio file to the hosted Whisper endpoint and returns its text.
pub struct WhisperApiTranscriber {
    client: Client,
    api_key: String,
}

impl WhisperApiTranscriber {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperApiTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let bytes = tokio::fs::read(audio_path).await?;
        let filename = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.webm")
            .to_string();

        debug!("Uploading {} bytes for transcription", bytes.len());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(filename))
            .text("model", WHISPER_MODEL);

        let response = self
            .client
            .post(TRANSCRIPTION_API_URL)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TranscriptionResponse = response.json().await?;
        Ok(body.text.trim().to_string())
    }
}
