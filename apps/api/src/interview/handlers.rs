//! Axum route handlers for the Interview API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::interview::analyzer::analyze_response;
use crate::interview::questions::{get_question, QuestionSource};
use crate::interview::scoring::{compute_readiness, ReadinessReport};
use crate::state::AppState;

const DEFAULT_ROLE: &str = "Software Engineer";
const DEFAULT_QUESTION: &str = "Tell me about yourself.";
/// A transcript shorter than this (after trimming) is unusable for analysis.
const MIN_TRANSCRIPT_LEN: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub role: Option<String>,
    #[serde(default)]
    pub use_ai: bool,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/question
///
/// Returns one interview question for the requested role, either from the
/// curated bank or AI-generated. The AI path degrades to the bank with a
/// client-visible note instead of erroring.
pub async fn handle_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let role = request
        .role
        .ok_or_else(|| AppError::Validation("Missing 'role' in request body".to_string()))?;

    let (question, source) = get_question(&role, request.use_ai, &state.llm).await;

    let note = match source {
        QuestionSource::Backup => Some("Served from backup".to_string()),
        QuestionSource::Bank | QuestionSource::Generated => None,
    };

    Ok(Json(QuestionResponse { question, note }))
}

/// POST /api/analyze
///
/// Multipart form: `audio` (file, required), `role`, `question`.
/// Transcribes the audio, analyzes the answer, and returns the full
/// readiness report. Analysis failures degrade internally — after a usable
/// transcript exists, this handler always succeeds.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ReadinessReport>, AppError> {
    let mut audio: Option<Bytes> = None;
    let mut role = DEFAULT_ROLE.to_string();
    let mut question = DEFAULT_QUESTION.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => {
                audio = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read audio field: {e}"))
                })?);
            }
            "role" => {
                role = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read role field: {e}"))
                })?;
            }
            "question" => {
                question = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read question field: {e}"))
                })?;
            }
            _ => {}
        }
    }

    let audio =
        audio.ok_or_else(|| AppError::Validation("No audio file provided".to_string()))?;

    // Scoped temp file for the upload — removed by drop on every path.
    let tmp = tempfile::Builder::new()
        .prefix("answer-")
        .suffix(".webm")
        .tempfile()
        .map_err(|e| AppError::Internal(e.into()))?;
    tokio::fs::write(tmp.path(), &audio)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    info!("Transcribing uploaded audio ({} bytes)", audio.len());
    let transcript = state
        .transcriber
        .transcribe(tmp.path())
        .await
        .map_err(|e| AppError::Transcription(e.to_string()))?;

    if transcript.trim().len() < MIN_TRANSCRIPT_LEN {
        return Err(AppError::UnprocessableEntity(
            "Could not transcribe audio. Please speak clearly and try again.".to_string(),
        ));
    }

    info!("Analyzing response for role '{role}'");
    let analysis = analyze_response(&transcript, &role, &question, &state.llm).await;
    let report = compute_readiness(transcript, analysis);

    Ok(Json(report))
}

// ────────────────────────────────────────────────────────────────────────────
// Router-level tests — no external calls; every request below resolves before
// reaching the LLM boundary.
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::interview::questions::question_bank;
    use crate::interview::roles::Role;
    use crate::llm_client::LlmClient;
    use crate::routes::build_router;
    use crate::state::AppState;
    use crate::transcription::fixed::FixedTranscriber;

    fn test_app() -> axum::Router {
        let state = AppState {
            llm: LlmClient::new("test-key".to_string()),
            transcriber: Arc::new(FixedTranscriber::default()),
        };
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = test_app()
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_question_without_role_is_400_with_error_key() {
        let response = test_app()
            .oneshot(
                Request::post("/api/question")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn test_question_from_bank_is_always_a_bank_member() {
        let app = test_app();
        let bank = question_bank(Role::HrInterview);
        for _ in 0..20 {
            let response = app
                .clone()
                .oneshot(
                    Request::post("/api/question")
                        .header("content-type", "application/json")
                        .body(Body::from(
                            r#"{"role": "HR Interview", "use_ai": false}"#,
                        ))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let body = body_json(response).await;
            let question = body["question"].as_str().unwrap();
            assert!(bank.contains(&question));
            assert!(body.get("note").is_none());
        }
    }

    #[tokio::test]
    async fn test_analyze_without_audio_is_400_with_error_key() {
        let boundary = "test-boundary-7213";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"role\"\r\n\r\n\
             Software Engineer\r\n\
             --{boundary}--\r\n"
        );
        let response = test_app()
            .oneshot(
                Request::post("/api/analyze")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body.get("error").is_some());
    }
}
