//! Fixed-transcript debug stub.
//!
//! DEBUG BACKEND: returns the same canned transcript for every upload and
//! never sends audio anywhere. Select with `TRANSCRIBER_BACKEND=fixed` to
//! exercise the analysis pipeline without a transcription API key.

use std::path::Path;

use async_trait::async_trait;

use super::{SpeechToText, TranscriptionError};

const DEBUG_TRANSCRIPT: &str = "This is a temporary test answer for debugging.";

pub struct FixedTranscriber {
    transcript: String,
}

impl FixedTranscriber {
    pub fn new(transcript: String) -> Self {
        Self { transcript }
    }
}

impl Default for FixedTranscriber {
    fn default() -> Self {
        Self::new(DEBUG_TRANSCRIPT.to_string())
    }
}

#[async_trait]
impl SpeechToText for FixedTranscriber {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriptionError> {
        Ok(self.transcript.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_transcriber_ignores_audio_path() {
        let transcriber = FixedTranscriber::default();
        let text = transcriber
            .transcribe(Path::new("/nonexistent/audio.webm"))
            .await
            .unwrap();
        assert_eq!(text, DEBUG_TRANSCRIPT);
    }

    #[tokio::test]
    async fn test_fixed_transcriber_returns_custom_transcript() {
        let transcriber = FixedTranscriber::new("Custom answer.".to_string());
        let text = transcriber.transcribe(Path::new("x.wav")).await.unwrap();
        assert_eq!(text, "Custom answer.");
    }
}
