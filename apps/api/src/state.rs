use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::transcription::SpeechToText;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable speech-to-text backend. Default: WhisperApiTranscriber.
    /// Swap via TRANSCRIBER_BACKEND env.
    pub transcriber: Arc<dyn SpeechToText>,
}
