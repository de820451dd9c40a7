//! Content and readability scoring.
//!
//! Content score = mean of three presence ratios (action verbs, technical
//! skills, soft skills), each `matches / vocabulary size`.
//! Readability = triangular penalty around 15 words per sentence.
//! Overall = round((content × 0.7 + readability × 0.3) × 100).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::scoring::vocabulary::{ACTION_VERBS, SOFT_SKILLS, TECHNICAL_SKILLS};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub content: f64,
    pub readability: f64,
    /// Sentence length (in words) that earns a full readability score.
    pub target_sentence_words: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            content: 0.7,
            readability: 0.3,
            target_sentence_words: 15.0,
        }
    }
}

/// Per-vocabulary presence ratios, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentBreakdown {
    pub action_verbs: f64,
    pub technical_skills: f64,
    pub soft_skills: f64,
}

impl ContentBreakdown {
    pub fn composite(&self) -> f64 {
        (self.action_verbs + self.technical_skills + self.soft_skills) / 3.0
    }
}

fn tokens(content: &str) -> HashSet<String> {
    content
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

fn containment_ratio(haystack_lower: &str, vocabulary: &[&str]) -> f64 {
    if vocabulary.is_empty() {
        return 0.0;
    }
    let hits = vocabulary
        .iter()
        .filter(|term| haystack_lower.contains(&term.to_lowercase()))
        .count();
    hits as f64 / vocabulary.len() as f64
}

pub fn content_breakdown(content: &str) -> ContentBreakdown {
    let words = tokens(content);
    let lower = content.to_lowercase();

    let verb_hits = ACTION_VERBS
        .iter()
        .filter(|verb| words.contains(**verb))
        .count();

    ContentBreakdown {
        action_verbs: verb_hits as f64 / ACTION_VERBS.len() as f64,
        technical_skills: containment_ratio(&lower, TECHNICAL_SKILLS),
        soft_skills: containment_ratio(&lower, SOFT_SKILLS),
    }
}

/// Composite content score in [0, 1]. Empty input scores 0.
pub fn analyze_content(content: &str) -> f64 {
    content_breakdown(content).composite()
}

/// Triangular readability score in [0, 1], peaking at the target sentence
/// length. Text with no words or no sentences scores 0.
pub fn calculate_readability(content: &str, weights: &ScoringWeights) -> f64 {
    // Only segments with text count, so a closing terminator does not add an
    // empty trailing sentence.
    let sentences = content
        .split(&['.', '!', '?'][..])
        .filter(|s| !s.trim().is_empty())
        .count();
    let words = content.split_whitespace().count();
    if sentences == 0 || words == 0 {
        return 0.0;
    }

    let target = weights.target_sentence_words;
    if target <= 0.0 {
        return 0.0;
    }
    let avg = words as f64 / sentences as f64;
    (1.0 - (avg - target).abs() / target).clamp(0.0, 1.0)
}

/// Weighted overall score as an integer percentage in [0, 100].
pub fn overall_score(content_score: f64, readability: f64, weights: &ScoringWeights) -> u32 {
    to_percent(content_score * weights.content + readability * weights.readability)
}

/// Converts a [0, 1] ratio to a rounded integer percentage.
pub fn to_percent(ratio: f64) -> u32 {
    if !ratio.is_finite() {
        return 0;
    }
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_action_verbs_counted_as_tokens() {
        let b = content_breakdown("Managed a team and developed a new process");
        assert!((b.action_verbs - 2.0 / 18.0).abs() < 1e-9);
        assert_eq!(b.technical_skills, 0.0);
        assert_eq!(b.soft_skills, 0.0);
        assert!(b.composite() > 0.0);
    }

    #[test]
    fn test_action_verbs_ignore_trailing_punctuation() {
        let b = content_breakdown("Led, managed. Optimized!");
        assert!((b.action_verbs - 3.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_skills_matched_as_substrings() {
        let b = content_breakdown("Shipped services on kubernetes with strong teamwork");
        assert!((b.technical_skills - 1.0 / 14.0).abs() < 1e-9);
        assert!((b.soft_skills - 1.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_javascript_also_matches_java() {
        // Plain containment: "javascript" contains "java".
        let b = content_breakdown("javascript");
        assert!((b.technical_skills - 2.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_content_scores_zero() {
        assert_eq!(analyze_content(""), 0.0);
        assert_eq!(calculate_readability("", &ScoringWeights::default()), 0.0);
        assert_eq!(calculate_readability("   ", &ScoringWeights::default()), 0.0);
        assert_eq!(calculate_readability("?!.", &ScoringWeights::default()), 0.0);
    }

    #[test]
    fn test_readability_peaks_at_fifteen_words() {
        let w = ScoringWeights::default();
        let sentence = "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen.";
        assert!((calculate_readability(sentence, &w) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_readability_triangular_penalty() {
        let w = ScoringWeights::default();
        // 8 words in one sentence: 1 - 7/15
        let score = calculate_readability("Managed a team and developed a new process", &w);
        assert!((score - (1.0 - 7.0 / 15.0)).abs() < 1e-9, "Score was {score}");
        // 30+ words per sentence bottoms out
        let long = vec!["word"; 30].join(" ");
        assert_eq!(calculate_readability(&long, &w), 0.0);
    }

    #[test]
    fn test_terminators_do_not_create_empty_sentences() {
        let w = ScoringWeights::default();
        let bare = "one two three four five six seven eight nine ten";
        let expected = 1.0 - 5.0 / 15.0;
        for text in [
            bare.to_string(),
            format!("{bare}."),
            format!("{bare}!!!"),
            format!("{bare}... "),
        ] {
            let score = calculate_readability(&text, &w);
            assert!((score - expected).abs() < 1e-9, "{text:?} scored {score}");
        }
    }

    #[test]
    fn test_overall_score_weighting() {
        let w = ScoringWeights::default();
        // 0.5*0.7 + 1.0*0.3 = 0.65
        assert_eq!(overall_score(0.5, 1.0, &w), 65);
        assert_eq!(overall_score(0.0, 0.0, &w), 0);
        assert_eq!(overall_score(1.0, 1.0, &w), 100);
    }

    #[test]
    fn test_to_percent_guards_non_finite() {
        assert_eq!(to_percent(f64::NAN), 0);
        assert_eq!(to_percent(1.7), 100);
    }

    proptest! {
        #[test]
        fn prop_content_score_in_unit_range(content in ".{0,400}") {
            let score = analyze_content(&content);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_readability_in_unit_range(content in "[a-z .!?]{0,400}") {
            let score = calculate_readability(&content, &ScoringWeights::default());
            prop_assert!(score.is_finite());
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_overall_bounded(content in "[a-zA-Z .]{1,300}") {
            let w = ScoringWeights::default();
            let overall = overall_score(
                analyze_content(&content),
                calculate_readability(&content, &w),
                &w,
            );
            prop_assert!(overall <= 100);
        }
    }
}
