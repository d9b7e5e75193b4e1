//! Heuristic scoring of a spoken viva answer.
//!
//! The concept score grows by 1.5 points per word up to 100. Engagement is
//! the attention score reported by the client, unchanged. Risk is "High"
//! strictly above 60.

use serde::{Deserialize, Serialize};

const POINTS_PER_WORD: f64 = 1.5;
const MAX_CONCEPT_SCORE: f64 = 100.0;
const CONCEPT_WEIGHT: f64 = 0.6;
const ENGAGEMENT_WEIGHT: f64 = 0.4;
const HIGH_RISK_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VivaAnalysis {
    pub concept_score: f64,
    pub engagement_score: f64,
    pub final_score: f64,
    pub risk_level: RiskLevel,
}

pub fn analyze_answer(answer: &str, attention_score: f64, risk_score: f64) -> VivaAnalysis {
    let word_count = answer.split_whitespace().count();
    let concept_score = (word_count as f64 * POINTS_PER_WORD).min(MAX_CONCEPT_SCORE);
    let engagement_score = attention_score;
    let final_score = concept_score * CONCEPT_WEIGHT + engagement_score * ENGAGEMENT_WEIGHT;

    let risk_level = if risk_score > HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };

    VivaAnalysis {
        concept_score: round2(concept_score),
        engagement_score: round2(engagement_score),
        final_score: round2(final_score),
        risk_level,
    }
}

/// Rounds to two decimals, resolving exact ties to the even digit.
/// Formatting works on the exact binary value, so `0.125` becomes `0.12`
/// while `2.675` (stored just below the tie) becomes `2.67`.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_ten_words_high_risk() {
        let analysis = analyze_answer(&words(10), 80.0, 70.0);
        assert_eq!(
            analysis,
            VivaAnalysis {
                concept_score: 15.0,
                engagement_score: 80.0,
                final_score: 41.0,
                risk_level: RiskLevel::High,
            }
        );
    }

    #[test]
    fn test_concept_score_caps_at_100() {
        let analysis = analyze_answer(&words(100), 50.0, 40.0);
        assert_eq!(analysis.concept_score, 100.0);
        assert_eq!(analysis.final_score, 80.0);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
    }

    #[rstest]
    #[case(60.0, RiskLevel::Low)]
    #[case(60.01, RiskLevel::High)]
    #[case(0.0, RiskLevel::Low)]
    fn test_risk_threshold_is_exclusive(#[case] risk: f64, #[case] expected: RiskLevel) {
        assert_eq!(analyze_answer("a b", 0.0, risk).risk_level, expected);
    }

    #[test]
    fn test_whitespace_runs_count_once() {
        let analysis = analyze_answer("  one\t two\n\nthree  ", 0.0, 0.0);
        assert_eq!(analysis.concept_score, 4.5);
    }

    #[test]
    fn test_empty_answer() {
        let analysis = analyze_answer("", 33.333, 10.0);
        assert_eq!(analysis.concept_score, 0.0);
        assert_eq!(analysis.engagement_score, 33.33);
        assert_eq!(analysis.final_score, 13.33);
    }

    #[rstest]
    #[case(0.125, 0.12)]
    #[case(0.375, 0.38)]
    #[case(2.675, 2.67)]
    #[case(41.005, 41.01)]
    #[case(-0.125, -0.12)]
    fn test_round2_ties_to_even(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(round2(input), expected);
    }

    #[test]
    fn test_engagement_tie_rounds_to_even() {
        let analysis = analyze_answer("", 0.125, 0.0);
        assert_eq!(analysis.engagement_score, 0.12);
    }

    #[test]
    fn test_risk_level_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"Low\"");
    }
}
