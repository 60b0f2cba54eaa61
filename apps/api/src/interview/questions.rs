//! Question Provider — serves one interview question per request, either from
//! the curated per-role banks or freshly generated by the LLM.
//!
//! The AI path is best-effort: any failure is caught and answered from the
//! default bank instead, tagged so the client can show a "served from backup"
//! note. No retries beyond that single fallback.

use rand::seq::SliceRandom;
use tracing::warn;

use crate::interview::prompts::QUESTION_PROMPT_TEMPLATE;
use crate::interview::roles::Role;
use crate::llm_client::{LlmClient, LlmError, SamplingParams};

/// High temperature for diverse questions.
const QUESTION_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.9,
    max_tokens: 150,
};

/// Curated question banks per role. Software Engineer and HR share the
/// generic behavioral list; MBA has its own.
const SOFTWARE_ENGINEER_QUESTIONS: &[&str] = &[
    "Tell me about yourself and why you're interested in this role.",
    "What is your greatest weakness, and how are you working to improve it?",
    "Describe a conflict you had with a colleague and how you resolved it.",
    "Where do you see yourself in five years?",
    "Why do you want to leave your current job?",
];

const HR_QUESTIONS: &[&str] = &[
    "Tell me about yourself and why you're interested in this role.",
    "What is your greatest weakness, and how are you working to improve it?",
    "Describe a conflict you had with a colleague and how you resolved it.",
    "Where do you see yourself in five years?",
    "Why do you want to leave your current job?",
];

const MBA_QUESTIONS: &[&str] = &[
    "Why do you want to pursue an MBA, and why at this institution?",
    "Describe a leadership experience where you drove significant change.",
    "How would you handle a situation where your team disagrees with your decision?",
    "Tell me about a failure in your career and what you learned from it.",
    "What is your post-MBA career goal and how does this program help you achieve it?",
];

/// Where a served question came from. `Backup` means the AI path failed and
/// the default bank answered instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    Bank,
    Generated,
    Backup,
}

pub fn question_bank(role: Role) -> &'static [&'static str] {
    match role {
        Role::SoftwareEngineer => SOFTWARE_ENGINEER_QUESTIONS,
        Role::HrInterview => HR_QUESTIONS,
        Role::MbaInterview => MBA_QUESTIONS,
    }
}

/// Uniform random pick from the role's bank. Unrecognized roles were already
/// degraded to the default by `Role::parse`.
pub fn random_bank_question(role: Role) -> String {
    question_bank(role)
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("question banks are non-empty")
        .to_string()
}

/// Returns one interview question for `role`.
///
/// `use_ai == false` picks uniformly from the static bank. `use_ai == true`
/// asks the LLM and falls back to the default bank on any failure.
pub async fn get_question(role: &str, use_ai: bool, llm: &LlmClient) -> (String, QuestionSource) {
    if !use_ai {
        return (random_bank_question(Role::parse(role)), QuestionSource::Bank);
    }

    match generate_ai_question(role, llm).await {
        Ok(question) => (question, QuestionSource::Generated),
        Err(e) => {
            warn!("Question generation failed, serving from bank: {e}");
            (random_bank_question(Role::default()), QuestionSource::Backup)
        }
    }
}

async fn generate_ai_question(role: &str, llm: &LlmClient) -> Result<String, LlmError> {
    let prompt = QUESTION_PROMPT_TEMPLATE.replace("{role}", role);
    let response = llm.call(&prompt, None, QUESTION_SAMPLING).await?;
    let text = response.text().ok_or(LlmError::EmptyContent)?;
    // Clean up any quotes the model may add
    Ok(strip_surrounding_quotes(text.trim()).to_string())
}

fn strip_surrounding_quotes(text: &str) -> &str {
    text.trim_matches('"').trim_matches('\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bank_has_five_questions() {
        for role in [
            Role::SoftwareEngineer,
            Role::HrInterview,
            Role::MbaInterview,
        ] {
            assert_eq!(question_bank(role).len(), 5);
        }
    }

    #[test]
    fn test_random_bank_question_is_a_bank_member() {
        for _ in 0..50 {
            let question = random_bank_question(Role::HrInterview);
            assert!(question_bank(Role::HrInterview).contains(&question.as_str()));
        }
    }

    #[test]
    fn test_unrecognized_role_uses_default_bank() {
        for _ in 0..50 {
            let question = random_bank_question(Role::parse("Quantum Gardener"));
            assert!(question_bank(Role::HrInterview).contains(&question.as_str()));
        }
    }

    #[test]
    fn test_strip_surrounding_quotes_double() {
        assert_eq!(
            strip_surrounding_quotes("\"Why this role?\""),
            "Why this role?"
        );
    }

    #[test]
    fn test_strip_surrounding_quotes_single_inside_double() {
        assert_eq!(strip_surrounding_quotes("\"'Why?'\""), "Why?");
    }

    #[test]
    fn test_strip_surrounding_quotes_leaves_interior_quotes() {
        assert_eq!(
            strip_surrounding_quotes("Explain \"ownership\" in Rust"),
            "Explain \"ownership\" in Rust"
        );
    }
}
