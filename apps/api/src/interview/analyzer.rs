//! Response Analyzer — turns a transcript into structured coaching feedback.
//!
//! The happy path is one low-temperature LLM call whose reply is expected to
//! be a single JSON object. The reply is untrusted: the JSON is located by
//! brace-substring extraction, scores are coerced and clamped, and missing
//! fields are defaulted. Any call or parse failure routes to the local
//! heuristic fallback — the caller always gets a complete result.

use serde::Deserialize;
use tracing::warn;

use crate::interview::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::llm_client::{LlmClient, SamplingParams};

/// Low temperature for consistent structured output.
const ANALYSIS_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.3,
    max_tokens: 1500,
};

/// Score assumed when the model omits one of the three numeric fields.
const DEFAULT_SCORE: i64 = 5;

/// Fixed filler-word list for the heuristic fallback. Covers English fillers
/// and common Hinglish ones.
const FILLER_WORDS: &[&str] = &[
    "um", "uh", "basically", "you know", "like", "actually", "so", "acha", "matlab", "toh",
];

/// Defaults used when the model reply parses but omits the suggestion list.
const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Focus on clear structure.",
    "Reduce filler words.",
    "Use professional vocabulary.",
];

/// Generic suggestions served by the heuristic fallback.
const FALLBACK_SUGGESTIONS: &[&str] = &[
    "Try to structure your answer with a clear beginning, middle, and end.",
    "Reduce filler words like 'um', 'basically', or 'you know'.",
    "Use the STAR method: Situation, Task, Action, Result.",
    "Practice speaking slowly and confidently.",
    "Focus on using professional vocabulary appropriate for interviews.",
];

/// Structured feedback for one interview answer. Scores are always in [0,10]
/// by construction; the struct is never mutated after that.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub grammar_score: i64,
    pub structure_score: i64,
    pub professional_tone_score: i64,
    pub filler_words: Vec<String>,
    pub star_method_detected: bool,
    pub improvement_suggestions: Vec<String>,
    pub rewritten_professional_answer: String,
}

/// Raw shape of the model's JSON reply. Everything is optional — the model
/// is not a contract.
#[derive(Debug, Deserialize)]
struct RawAnalysis {
    grammar_score: Option<f64>,
    structure_score: Option<f64>,
    professional_tone_score: Option<f64>,
    filler_words: Option<Vec<String>>,
    star_method_detected: Option<bool>,
    improvement_suggestions: Option<Vec<String>>,
    rewritten_professional_answer: Option<String>,
}

/// Analyzes an interview answer. Never fails: external-call and parse
/// failures degrade to `fallback_analysis`.
pub async fn analyze_response(
    transcript: &str,
    role: &str,
    question: &str,
    llm: &LlmClient,
) -> AnalysisResult {
    let prompt = ANALYSIS_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{question}", question)
        .replace("{transcript}", transcript);

    let response = match llm.call(&prompt, Some(ANALYSIS_SYSTEM), ANALYSIS_SAMPLING).await {
        Ok(response) => response,
        Err(e) => {
            warn!("Analysis call failed, using fallback: {e}");
            return fallback_analysis(transcript);
        }
    };

    let raw = match response.text() {
        Some(text) => text,
        None => {
            warn!("Analysis reply had no content, using fallback");
            return fallback_analysis(transcript);
        }
    };

    match parse_analysis(raw, transcript) {
        Some(result) => result,
        None => {
            warn!("Analysis reply was not parseable JSON, using fallback");
            fallback_analysis(transcript)
        }
    }
}

/// Parses the model reply into an `AnalysisResult`, clamping scores and
/// filling defaults. Returns `None` when no JSON object can be recovered.
fn parse_analysis(raw: &str, transcript: &str) -> Option<AnalysisResult> {
    let json_str = extract_json_object(raw)?;
    let parsed: RawAnalysis = serde_json::from_str(json_str).ok()?;

    Some(AnalysisResult {
        grammar_score: parsed.grammar_score.map(clamp_score).unwrap_or(DEFAULT_SCORE),
        structure_score: parsed
            .structure_score
            .map(clamp_score)
            .unwrap_or(DEFAULT_SCORE),
        professional_tone_score: parsed
            .professional_tone_score
            .map(clamp_score)
            .unwrap_or(DEFAULT_SCORE),
        filler_words: parsed.filler_words.unwrap_or_default(),
        star_method_detected: parsed.star_method_detected.unwrap_or(false),
        improvement_suggestions: parsed.improvement_suggestions.unwrap_or_else(|| {
            DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
        }),
        rewritten_professional_answer: parsed
            .rewritten_professional_answer
            .unwrap_or_else(|| transcript.to_string()),
    })
}

/// Extracts the first brace-delimited substring (first `{` through last `}`).
/// Tolerates prose or code fences around the JSON; anything this misses is
/// treated the same as a failed call.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Coerces a model score to an integer in [0,10]. Fractional values truncate.
fn clamp_score(value: f64) -> i64 {
    (value as i64).clamp(0, 10)
}

/// Heuristic analysis used when the model is unavailable or unusable.
/// Fixed scores, a token scan for fillers (multi-word fillers only match via
/// the LLM path), and a placeholder rewrite embedding the original answer.
pub fn fallback_analysis(transcript: &str) -> AnalysisResult {
    let lowered = transcript.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let found_fillers = FILLER_WORDS
        .iter()
        .copied()
        .filter(|f| words.contains(f))
        .map(|f| f.to_string())
        .collect();

    AnalysisResult {
        grammar_score: 6,
        structure_score: 5,
        professional_tone_score: 6,
        filler_words: found_fillers,
        star_method_detected: false,
        improvement_suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        rewritten_professional_answer: format!(
            "[Auto-rewrite unavailable] Original response: {transcript}"
        ),
    }
}
