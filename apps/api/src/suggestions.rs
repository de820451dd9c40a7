//! Rule-based content suggestions per résumé section.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;

const WEAK_EXPERIENCE_PHRASES: &[&str] = &["worked on projects", "helped customers", "did daily tasks"];

const STRONG_EXPERIENCE_EXAMPLES: &[&str] = &[
    "Led cross-functional team of 5 to deliver project 2 weeks ahead of schedule",
    "Increased customer satisfaction by 25% through implementation of automated response system",
    "Streamlined workflow processes resulting in 30% efficiency improvement",
];

const EXPERIENCE_TIPS: &[&str] = &[
    "Use specific metrics and numbers",
    "Start with strong action verbs",
    "Focus on achievements rather than duties",
    "Include quantifiable results",
];

const SUGGESTED_TECHNICAL_SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "TypeScript",
    "MongoDB",
    "AWS",
    "Docker",
    "Git",
    "CI/CD",
];

const EDUCATION_TIPS: &[&str] = &[
    "Include relevant coursework",
    "Highlight academic achievements",
    "List any certifications",
    "Mention research projects",
];

const MAX_SKILL_SUGGESTIONS: usize = 3;

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub section: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Suggestion {
    Improvement { message: String, examples: Vec<String> },
    Tips { message: String, tips: Vec<String> },
    Suggestion { message: String, skills: Vec<String> },
    General { message: String },
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn suggest(section: &str, content: &str) -> Vec<Suggestion> {
    let lower = content.to_lowercase();
    let mut suggestions = Vec::new();

    match section {
        "experience" => {
            if WEAK_EXPERIENCE_PHRASES.iter().any(|p| lower.contains(p)) {
                suggestions.push(Suggestion::Improvement {
                    message: "Consider using stronger action verbs and specific metrics".to_string(),
                    examples: owned(&STRONG_EXPERIENCE_EXAMPLES[..2]),
                });
            }
            suggestions.push(Suggestion::Tips {
                message: "General tips for experience section:".to_string(),
                tips: owned(EXPERIENCE_TIPS),
            });
        }
        "skills" => {
            let missing: Vec<String> = SUGGESTED_TECHNICAL_SKILLS
                .iter()
                .filter(|skill| !lower.contains(&skill.to_lowercase()))
                .take(MAX_SKILL_SUGGESTIONS)
                .map(|s| s.to_string())
                .collect();
            if !missing.is_empty() {
                suggestions.push(Suggestion::Suggestion {
                    message: "Consider adding these relevant technical skills:".to_string(),
                    skills: missing,
                });
            }
        }
        "education" => suggestions.push(Suggestion::Tips {
            message: "Tips for education section:".to_string(),
            tips: owned(EDUCATION_TIPS),
        }),
        _ => suggestions.push(Suggestion::General {
            message: "Focus on highlighting achievements and using specific metrics".to_string(),
        }),
    }

    suggestions
}

/// POST /api/v1/suggestions
pub async fn handle_suggestions(
    ApiJson(request): ApiJson<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, AppError> {
    Ok(Json(SuggestionResponse {
        suggestions: suggest(request.section.trim(), &request.content),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_experience_gets_improvement() {
        let s = suggest("experience", "I Worked on projects for the team");
        assert_eq!(s.len(), 2);
        match &s[0] {
            Suggestion::Improvement { examples, .. } => assert_eq!(examples.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(s[1], Suggestion::Tips { .. }));
    }

    #[test]
    fn test_strong_experience_gets_tips_only() {
        let s = suggest("experience", "Reduced p99 latency by 40%");
        assert_eq!(s.len(), 1);
        assert!(matches!(s[0], Suggestion::Tips { .. }));
    }

    #[test]
    fn test_skills_suggests_first_three_missing() {
        let s = suggest("skills", "react, typescript");
        assert_eq!(
            s,
            vec![Suggestion::Suggestion {
                message: "Consider adding these relevant technical skills:".to_string(),
                skills: vec!["Node.js".to_string(), "MongoDB".to_string(), "AWS".to_string()],
            }]
        );
    }

    #[test]
    fn test_skills_with_everything_yields_nothing() {
        let all = SUGGESTED_TECHNICAL_SKILLS.join(" ");
        assert!(suggest("skills", &all).is_empty());
    }

    #[test]
    fn test_unknown_section_is_general() {
        let s = suggest("hobbies", "chess");
        assert!(matches!(s[0], Suggestion::General { .. }));
    }

    #[test]
    fn test_suggestion_serializes_with_type_tag() {
        let value = serde_json::to_value(&suggest("education", "")[0]).unwrap();
        assert_eq!(value["type"], "tips");
        assert_eq!(value["tips"].as_array().unwrap().len(), 4);
    }
}
