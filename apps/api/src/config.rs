use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub transcriber: TranscriberBackend,
    pub cors_allowed_origins: Vec<String>,
}

/// Which speech-to-text backend to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriberBackend {
    /// Hosted Whisper transcription API.
    WhisperApi,
    /// Fixed-transcript debug stub — never sends audio anywhere.
    Fixed,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let transcriber = match std::env::var("TRANSCRIBER_BACKEND")
            .unwrap_or_else(|_| "whisper-api".to_string())
            .as_str()
        {
            "whisper-api" => TranscriberBackend::WhisperApi,
            "fixed" => TranscriberBackend::Fixed,
            other => bail!("Unknown TRANSCRIBER_BACKEND '{other}' (expected 'whisper-api' or 'fixed')"),
        };

        Ok(Config {
            groq_api_key: require_env("GROQ_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            transcriber,
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|_| default_origins()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Local dev frontends served by Vite / CRA.
fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}
