//! Score Aggregator — collapses the analyzer's sub-scores into the final
//! 0–100 readiness score.

use serde::Serialize;

use crate::interview::analyzer::AnalysisResult;

const GRAMMAR_WEIGHT: f64 = 0.3;
const STRUCTURE_WEIGHT: f64 = 0.3;
const TONE_WEIGHT: f64 = 0.2;
const CONFIDENCE_WEIGHT: f64 = 0.2;
/// Confidence penalty per detected filler word, floored at 0 confidence.
const FILLER_PENALTY: f64 = 1.5;
/// Flat experience reward for completing an analysis, independent of score.
const XP_EARNED: u32 = 50;

/// Full response body of a successful analysis. Derived per request, never
/// stored.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    pub transcript: String,
    pub grammar_score: i64,
    pub structure_score: i64,
    pub professional_tone_score: i64,
    pub confidence_score: f64,
    pub filler_words: Vec<String>,
    pub star_method_detected: bool,
    pub improvement_suggestions: Vec<String>,
    pub rewritten_professional_answer: String,
    pub readiness_score: f64,
    pub xp_earned: u32,
}

/// Computes the readiness report from an analysis.
///
/// confidence = clamp(10 - 1.5 * filler_count, 0, 10)
/// readiness  = clamp((grammar*0.3 + structure*0.3 + tone*0.2 + confidence*0.2) * 10, 0, 100)
pub fn compute_readiness(transcript: String, analysis: AnalysisResult) -> ReadinessReport {
    let filler_count = analysis.filler_words.len();
    let confidence = (10.0 - filler_count as f64 * FILLER_PENALTY).clamp(0.0, 10.0);

    let weighted = analysis.grammar_score as f64 * GRAMMAR_WEIGHT
        + analysis.structure_score as f64 * STRUCTURE_WEIGHT
        + analysis.professional_tone_score as f64 * TONE_WEIGHT
        + confidence * CONFIDENCE_WEIGHT;

    let readiness_score = round_1dp((weighted * 10.0).clamp(0.0, 100.0));

    ReadinessReport {
        transcript,
        grammar_score: analysis.grammar_score,
        structure_score: analysis.structure_score,
        professional_tone_score: analysis.professional_tone_score,
        confidence_score: round_1dp(confidence),
        filler_words: analysis.filler_words,
        star_method_detected: analysis.star_method_detected,
        improvement_suggestions: analysis.improvement_suggestions,
        rewritten_professional_answer: analysis.rewritten_professional_answer,
        readiness_score,
        xp_earned: XP_EARNED,
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(grammar: i64, structure: i64, tone: i64, fillers: &[&str]) -> AnalysisResult {
        AnalysisResult {
            grammar_score: grammar,
            structure_score: structure,
            professional_tone_score: tone,
            filler_words: fillers.iter().map(|f| f.to_string()).collect(),
            star_method_detected: false,
            improvement_suggestions: vec![],
            rewritten_professional_answer: String::new(),
        }
    }

    #[test]
    fn test_worked_example_scores_77() {
        // grammar=8, structure=7, tone=9, two fillers → confidence 7 → readiness 77.0
        let report = compute_readiness(
            "transcript".to_string(),
            analysis(8, 7, 9, &["um", "like"]),
        );
        assert_eq!(report.confidence_score, 7.0);
        assert_eq!(report.readiness_score, 77.0);
    }

    #[test]
    fn test_confidence_non_increasing_in_filler_count() {
        let fillers: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        let mut previous = f64::INFINITY;
        for count in 0..20 {
            let mut a = analysis(5, 5, 5, &[]);
            a.filler_words = fillers[..count].to_vec();
            let report = compute_readiness(String::new(), a);
            assert!(report.confidence_score <= previous);
            assert!(report.confidence_score >= 0.0);
            previous = report.confidence_score;
        }
    }

    #[test]
    fn test_confidence_floors_at_zero() {
        let report = compute_readiness(
            String::new(),
            analysis(5, 5, 5, &["a", "b", "c", "d", "e", "f", "g"]),
        );
        assert_eq!(report.confidence_score, 0.0);
    }

    #[test]
    fn test_readiness_bounds() {
        let zero = compute_readiness(
            String::new(),
            analysis(0, 0, 0, &["a", "b", "c", "d", "e", "f", "g"]),
        );
        assert_eq!(zero.readiness_score, 0.0);

        let full = compute_readiness(String::new(), analysis(10, 10, 10, &[]));
        assert_eq!(full.readiness_score, 100.0);
    }

    #[test]
    fn test_readiness_rounds_to_one_decimal_place() {
        // One filler → confidence 8.5 → weighted 8.0 → readiness 80.0
        let report = compute_readiness(String::new(), analysis(8, 7, 9, &["um"]));
        assert_eq!(report.readiness_score, 80.0);
        let scaled = report.readiness_score * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }

    #[test]
    fn test_xp_is_constant_regardless_of_score() {
        let low = compute_readiness(String::new(), analysis(0, 0, 0, &[]));
        let high = compute_readiness(String::new(), analysis(10, 10, 10, &[]));
        assert_eq!(low.xp_earned, 50);
        assert_eq!(high.xp_earned, 50);
    }

    #[test]
    fn test_report_carries_analysis_fields_through() {
        let mut a = analysis(6, 5, 6, &["toh"]);
        a.star_method_detected = true;
        a.improvement_suggestions = vec!["Quantify impact.".to_string()];
        a.rewritten_professional_answer = "Polished.".to_string();
        let report = compute_readiness("what I said".to_string(), a);
        assert_eq!(report.transcript, "what I said");
        assert!(report.star_method_detected);
        assert_eq!(report.improvement_suggestions, vec!["Quantify impact."]);
        assert_eq!(report.rewritten_professional_answer, "Polished.");
        assert_eq!(report.filler_words, vec!["toh"]);
    }
}
