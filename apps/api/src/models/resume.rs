//! Persisted résumé record. JSON field names are part of the stored layout and
//! must not change without a migration.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceItem {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationItem {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub gpa: Option<String>,
    pub achievements: Vec<String>,
}

/// A named group of skills, e.g. "Languages" → ["Rust", "Go"].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectItem {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationItem {
    pub name: String,
    pub issuer: String,
    pub date: Option<NaiveDate>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub text: String,
    pub background: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#2d3748".to_string(),
            secondary: "#4a5568".to_string(),
            text: "#1a202c".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSettings {
    pub family: String,
    pub size: String,
    pub line_height: String,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "Inter".to_string(),
            size: "11pt".to_string(),
            line_height: "1.4".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub sections: u32,
    pub items: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            sections: 24,
            items: 12,
        }
    }
}

/// Visual configuration: template id, colors, font, spacing and section order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub template: String,
    pub theme: ThemeColors,
    pub font: FontSettings,
    pub spacing: Spacing,
    pub order: Vec<String>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            template: "modern".to_string(),
            theme: ThemeColors::default(),
            font: FontSettings::default(),
            spacing: Spacing::default(),
            order: ["summary", "experience", "education", "skills", "projects", "certifications"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Body of create/update requests. The owner always comes from the
/// authenticated identity, never from the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeInput {
    pub title: String,
    pub personal: PersonalDetails,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectItem>,
    pub certifications: Vec<CertificationItem>,
    pub layout: Layout,
}

/// Body of update requests. Only the sections present in the body change;
/// anything omitted keeps its stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResumePatch {
    pub title: Option<String>,
    pub personal: Option<PersonalDetails>,
    pub experience: Option<Vec<ExperienceItem>>,
    pub education: Option<Vec<EducationItem>>,
    pub skills: Option<Vec<SkillGroup>>,
    pub projects: Option<Vec<ProjectItem>>,
    pub certifications: Option<Vec<CertificationItem>>,
    pub layout: Option<Layout>,
}

impl ResumePatch {
    /// The full editable state that results from laying this patch over `record`.
    pub fn merge_onto(self, record: &ResumeRecord) -> ResumeInput {
        ResumeInput {
            title: self.title.unwrap_or_else(|| record.title.clone()),
            personal: self.personal.unwrap_or_else(|| record.personal.clone()),
            experience: self.experience.unwrap_or_else(|| record.experience.clone()),
            education: self.education.unwrap_or_else(|| record.education.clone()),
            skills: self.skills.unwrap_or_else(|| record.skills.clone()),
            projects: self.projects.unwrap_or_else(|| record.projects.clone()),
            certifications: self
                .certifications
                .unwrap_or_else(|| record.certifications.clone()),
            layout: self.layout.unwrap_or_else(|| record.layout.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub personal: PersonalDetails,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectItem>,
    pub certifications: Vec<CertificationItem>,
    pub layout: Layout,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRecord {
    /// Builds a fresh record for `user_id` with a new id and matching timestamps.
    pub fn new(user_id: Uuid, input: ResumeInput) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            personal: input.personal,
            experience: input.experience,
            education: input.education,
            skills: input.skills,
            projects: input.projects,
            certifications: input.certifications,
            layout: input.layout,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every editable field, keeping identity and `created_at`.
    pub fn apply_update(&mut self, input: ResumeInput) {
        self.title = input.title;
        self.personal = input.personal;
        self.experience = input.experience;
        self.education = input.education;
        self.skills = input.skills;
        self.projects = input.projects;
        self.certifications = input.certifications;
        self.layout = input.layout;
        self.updated_at = Utc::now();
    }
}

/// Row shape of the `resumes` table; nested sections are stored as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub personal: Json<PersonalDetails>,
    pub experience: Json<Vec<ExperienceItem>>,
    pub education: Json<Vec<EducationItem>>,
    pub skills: Json<Vec<SkillGroup>>,
    pub projects: Json<Vec<ProjectItem>>,
    pub certifications: Json<Vec<CertificationItem>>,
    pub layout: Json<Layout>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for ResumeRecord {
    fn from(row: ResumeRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            personal: row.personal.0,
            experience: row.experience.0,
            education: row.education.0,
            skills: row.skills.0,
            projects: row.projects.0,
            certifications: row.certifications.0,
            layout: row.layout.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
