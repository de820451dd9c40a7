//! Builds the ATS analytics report for a `ResumeData` snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::document::ResumeData;
use crate::scoring::content::{
    analyze_content, calculate_readability, content_breakdown, overall_score, to_percent,
    ScoringWeights,
};
use crate::scoring::vocabulary::{
    ACTION_VERBS, COMMON_INDUSTRY_KEYWORDS, INDUSTRY, SOFT_SKILLS, TECHNICAL_SKILLS,
};

/// Sub-scores below this get their category's suggestions attached.
const IMPROVEMENT_THRESHOLD: u32 = 70;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    pub action_verbs: u32,
    pub technical_skills: u32,
    pub soft_skills: u32,
    pub readability: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScore {
    pub overall: u32,
    pub details: ScoreDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub category: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionQuality {
    /// Character count of the section text.
    pub length: usize,
    pub quality: u32,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionAnalysis {
    pub summary: SectionQuality,
    pub experience: SectionQuality,
    pub skills: SectionQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    pub industry: String,
    pub percentile: u32,
    pub common_missing_keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub ats_score: AtsScore,
    /// Occurrences per 100 words for each vocabulary term present.
    pub keyword_density: BTreeMap<String, f64>,
    pub improvements: Vec<Improvement>,
    pub section_analysis: SectionAnalysis,
    pub competitive_analysis: CompetitiveAnalysis,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn analyze_resume(data: &ResumeData, weights: &ScoringWeights) -> AnalyticsReport {
    let full_text = data.full_text();

    let breakdown = content_breakdown(&full_text);
    let content_score = breakdown.composite();
    let readability = calculate_readability(&full_text, weights);

    let details = ScoreDetails {
        action_verbs: to_percent(breakdown.action_verbs),
        technical_skills: to_percent(breakdown.technical_skills),
        soft_skills: to_percent(breakdown.soft_skills),
        readability: to_percent(readability),
    };

    AnalyticsReport {
        ats_score: AtsScore {
            overall: overall_score(content_score, readability, weights),
            details: details.clone(),
        },
        keyword_density: keyword_density(&full_text),
        improvements: improvements_for(&details),
        section_analysis: section_analysis(data),
        competitive_analysis: CompetitiveAnalysis {
            industry: INDUSTRY.to_string(),
            percentile: to_percent(content_score),
            common_missing_keywords: missing_industry_keywords(&full_text),
        },
    }
}

fn keyword_density(text: &str) -> BTreeMap<String, f64> {
    let lower = text.to_lowercase();
    let words: Vec<String> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| !w.is_empty())
        .collect();
    let mut density = BTreeMap::new();
    if words.is_empty() {
        return density;
    }

    let per_hundred = |count: usize| {
        let raw = count as f64 * 100.0 / words.len() as f64;
        (raw * 100.0).round() / 100.0
    };

    for verb in ACTION_VERBS {
        let count = words.iter().filter(|w| w.as_str() == *verb).count();
        if count > 0 {
            density.insert(verb.to_string(), per_hundred(count));
        }
    }
    for term in TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS) {
        let term = term.to_lowercase();
        let count = lower.matches(term.as_str()).count();
        if count > 0 {
            density.insert(term, per_hundred(count));
        }
    }
    density
}

fn improvements_for(details: &ScoreDetails) -> Vec<Improvement> {
    let rules: [(&str, u32, &[&str]); 4] = [
        (
            "Action Verbs",
            details.action_verbs,
            &[
                "Add more measurable achievements",
                "Use stronger action verbs",
                "Include specific metrics and results",
            ],
        ),
        (
            "Technical Skills",
            details.technical_skills,
            &[
                "Add relevant technical skills",
                "Include certifications",
                "Highlight tools and technologies used",
            ],
        ),
        (
            "Soft Skills",
            details.soft_skills,
            &[
                "Demonstrate leadership abilities",
                "Highlight team collaboration",
                "Show problem-solving examples",
            ],
        ),
        (
            "Readability",
            details.readability,
            &[
                "Aim for sentences of around 15 words",
                "Split long sentences into separate bullets",
                "End each bullet with clear punctuation",
            ],
        ),
    ];

    rules
        .iter()
        .filter(|(_, score, _)| *score < IMPROVEMENT_THRESHOLD)
        .map(|(category, _, suggestions)| Improvement {
            category: category.to_string(),
            suggestions: strings(suggestions),
        })
        .collect()
}

fn section_analysis(data: &ResumeData) -> SectionAnalysis {
    let summary = &data.personal_info.summary;
    let experience_length: usize = data
        .experience
        .iter()
        .map(|e| e.description.join(" ").chars().count())
        .sum();
    let skills_text = data.skills_text();

    SectionAnalysis {
        summary: SectionQuality {
            length: summary.chars().count(),
            quality: to_percent(analyze_content(summary)),
            suggestions: strings(&[
                "Make it more concise",
                "Add your unique value proposition",
                "Include career objectives",
            ]),
        },
        experience: SectionQuality {
            length: experience_length,
            quality: to_percent(analyze_content(&data.experience_text())),
            suggestions: strings(&[
                "Add more quantifiable achievements",
                "Use industry-specific keywords",
                "Focus on results rather than duties",
            ]),
        },
        skills: SectionQuality {
            length: skills_text.chars().count(),
            quality: to_percent(analyze_content(&skills_text)),
            suggestions: strings(&[
                "Add more technical skills",
                "Include skill proficiency levels",
                "Group skills by category",
            ]),
        },
    }
}

fn missing_industry_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    COMMON_INDUSTRY_KEYWORDS
        .iter()
        .filter(|k| !lower.contains(*k))
        .map(|k| k.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{ExperienceEntry, PersonalInfo};

    fn make_data(summary: &str, bullets: &[&str], skills: &[&str]) -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Grace Hopper".to_string(),
                summary: summary.to_string(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                title: "Engineer".to_string(),
                company: "Navy".to_string(),
                location: "Arlington".to_string(),
                start_date: "1943".to_string(),
                end_date: "1986".to_string(),
                description: bullets.iter().map(|b| b.to_string()).collect(),
            }],
            education: vec![],
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let data = ResumeData {
            personal_info: PersonalInfo::default(),
            experience: vec![],
            education: vec![],
            skills: vec![],
        };
        let report = analyze_resume(&data, &ScoringWeights::default());
        assert_eq!(report.ats_score.overall, 0);
        assert_eq!(report.ats_score.details.readability, 0);
        assert!(report.keyword_density.is_empty());
        assert_eq!(report.section_analysis.summary.length, 0);
        assert_eq!(report.improvements.len(), 4);
    }

    #[test]
    fn test_sub_scores_reflect_each_vocabulary() {
        let data = make_data(
            "Engineer focused on leadership.",
            &["Managed a team and developed a new process."],
            &["Python", "Docker"],
        );
        let report = analyze_resume(&data, &ScoringWeights::default());
        let d = &report.ats_score.details;
        assert_eq!(d.action_verbs, to_percent(2.0 / 18.0));
        assert_eq!(d.technical_skills, to_percent(2.0 / 14.0));
        assert_eq!(d.soft_skills, to_percent(1.0 / 9.0));
        assert!(report.ats_score.overall <= 100);
        assert_eq!(report.competitive_analysis.industry, "Technology");
    }

    #[test]
    fn test_keyword_density_counts_per_hundred_words() {
        let data = make_data("", &["Managed managed work."], &[]);
        let report = analyze_resume(&data, &ScoringWeights::default());
        // full text: " Managed managed work. " → 3 words, "managed" twice
        assert_eq!(report.keyword_density.get("managed"), Some(&66.67));
    }

    #[test]
    fn test_improvements_only_for_weak_categories() {
        let details = ScoreDetails {
            action_verbs: 90,
            technical_skills: 10,
            soft_skills: 70,
            readability: 69,
        };
        let categories: Vec<_> = improvements_for(&details)
            .into_iter()
            .map(|i| i.category)
            .collect();
        assert_eq!(categories, vec!["Technical Skills", "Readability"]);
    }

    #[test]
    fn test_missing_keywords_exclude_present_ones() {
        let data = make_data("Applied machine learning to logistics.", &[], &[]);
        let report = analyze_resume(&data, &ScoringWeights::default());
        let missing = &report.competitive_analysis.common_missing_keywords;
        assert_eq!(missing.len(), 3);
        assert!(!missing.contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_section_lengths_count_characters() {
        let data = make_data("Résumé", &["ab", "cd"], &["Go", "Rust"]);
        let report = analyze_resume(&data, &ScoringWeights::default());
        assert_eq!(report.section_analysis.summary.length, 6);
        assert_eq!(report.section_analysis.experience.length, 5);
        assert_eq!(report.section_analysis.skills.length, 7);
    }

    #[test]
    fn test_report_is_deterministic() {
        let data = make_data(
            "Led platform work with strong communication.",
            &["Reduced latency by 40% using Kubernetes and SQL."],
            &["AWS", "Git"],
        );
        let w = ScoringWeights::default();
        assert_eq!(analyze_resume(&data, &w), analyze_resume(&data, &w));
    }
}
