// Interview coaching core.
// Implements: question provision, response analysis (+ heuristic fallback), readiness scoring.
// All LLM calls go through llm_client — no direct Groq calls here.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod roles;
pub mod scoring;
