//! `ResumeData`: the flattened snapshot consumed by the scoring engine and
//! the export formatter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::resume::{ExperienceItem, ResumeRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// One entry per bullet.
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

impl EducationEntry {
    /// The GPA to print, if any. Blank strings count as absent.
    pub fn gpa(&self) -> Option<&str> {
        self.gpa.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }
}

/// The four top-level sections are required; a body missing any of them is
/// rejected before it reaches the formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl ResumeData {
    /// `email | phone | location`, as printed under the name.
    pub fn contact_line(&self) -> String {
        let p = &self.personal_info;
        format!("{} | {} | {}", p.email, p.phone, p.location)
    }

    /// Summary, experience bullets and skills joined with single spaces.
    pub fn full_text(&self) -> String {
        let mut parts = Vec::with_capacity(self.experience.len() + 2);
        parts.push(self.personal_info.summary.clone());
        parts.extend(self.experience.iter().map(|e| e.description.join(" ")));
        parts.push(self.skills.join(" "));
        parts.join(" ")
    }

    pub fn experience_text(&self) -> String {
        self.experience
            .iter()
            .map(|e| e.description.join(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn skills_text(&self) -> String {
        self.skills.join(" ")
    }
}

const DATE_FORMAT: &str = "%b %Y";

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn experience_end(item: &ExperienceItem) -> String {
    if item.current {
        "Present".to_string()
    } else {
        format_date(item.end_date)
    }
}

impl From<&ResumeRecord> for ResumeData {
    fn from(record: &ResumeRecord) -> Self {
        let p = &record.personal;
        let personal_info = PersonalInfo {
            name: p.name.clone().unwrap_or_default(),
            email: p.email.clone().unwrap_or_default(),
            phone: p.phone.clone().unwrap_or_default(),
            location: p.location.clone().unwrap_or_default(),
            summary: p.summary.clone().unwrap_or_default(),
        };

        let experience = record
            .experience
            .iter()
            .map(|item| {
                let mut description = Vec::with_capacity(item.achievements.len() + 1);
                if !item.description.trim().is_empty() {
                    description.push(item.description.trim().to_string());
                }
                description.extend(
                    item.achievements
                        .iter()
                        .filter(|a| !a.trim().is_empty())
                        .cloned(),
                );
                ExperienceEntry {
                    title: item.position.clone(),
                    company: item.company.clone(),
                    location: item.location.clone(),
                    start_date: format_date(item.start_date),
                    end_date: experience_end(item),
                    description,
                }
            })
            .collect();

        let education = record
            .education
            .iter()
            .map(|item| EducationEntry {
                degree: if item.field.is_empty() {
                    item.degree.clone()
                } else {
                    format!("{} in {}", item.degree, item.field)
                },
                school: item.school.clone(),
                location: item.location.clone(),
                graduation_date: format_date(item.end_date),
                gpa: item.gpa.clone().filter(|g| !g.trim().is_empty()),
            })
            .collect();

        let skills = record
            .skills
            .iter()
            .flat_map(|group| group.items.iter().cloned())
            .collect();

        ResumeData {
            personal_info,
            experience,
            education,
            skills,
        }
    }
}
