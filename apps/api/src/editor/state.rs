use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::{
    EducationItem, ExperienceItem, Layout, PersonalDetails, ResumeInput, SkillGroup,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPersonal {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
}

/// Experience fields as submitted by the form, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorExperience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: String,
}

impl EditorExperience {
    pub fn from_draft(id: Uuid, draft: ExperienceDraft) -> Self {
        Self {
            id,
            company: draft.company,
            position: draft.position,
            location: draft.location,
            start_date: draft.start_date,
            end_date: draft.end_date,
            current: draft.current,
            description: draft.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationDraft {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorEducation {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: Option<NaiveDate>,
}

impl EditorEducation {
    pub fn from_draft(id: Uuid, draft: EducationDraft) -> Self {
        Self {
            id,
            school: draft.school,
            degree: draft.degree,
            field: draft.field,
            graduation_date: draft.graduation_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillDraft {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: Uuid,
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorStyle {
    pub template: String,
    pub theme: String,
    pub font: String,
    /// Multiplier applied to the layout's base spacing.
    pub spacing: f32,
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            template: "modern".to_string(),
            theme: "default".to_string(),
            font: "Inter".to_string(),
            spacing: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorState {
    pub personal: EditorPersonal,
    pub experience: Vec<EditorExperience>,
    pub education: Vec<EditorEducation>,
    pub skill_categories: Vec<SkillCategory>,
    pub style: EditorStyle,
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl EditorState {
    /// Serializes the edit session into the body of a create/update request.
    pub fn to_resume_input(&self, title: &str) -> ResumeInput {
        let p = &self.personal;
        let base = Layout::default();
        let scale = |v: u32| (v as f32 * self.style.spacing.max(0.0)).round() as u32;

        let mut layout = base.clone();
        layout.template = self.style.template.clone();
        layout.font.family = self.style.font.clone();
        layout.spacing.sections = scale(base.spacing.sections);
        layout.spacing.items = scale(base.spacing.items);

        ResumeInput {
            title: title.to_string(),
            personal: PersonalDetails {
                name: non_empty(&p.name),
                email: non_empty(&p.email),
                phone: non_empty(&p.phone),
                location: non_empty(&p.location),
                website: non_empty(&p.website),
                summary: non_empty(&p.summary),
            },
            experience: self
                .experience
                .iter()
                .map(|e| ExperienceItem {
                    company: e.company.clone(),
                    position: e.position.clone(),
                    location: e.location.clone(),
                    start_date: e.start_date,
                    end_date: e.end_date,
                    current: e.current,
                    description: e.description.clone(),
                    achievements: vec![],
                })
                .collect(),
            education: self
                .education
                .iter()
                .map(|e| EducationItem {
                    school: e.school.clone(),
                    degree: e.degree.clone(),
                    field: e.field.clone(),
                    end_date: e.graduation_date,
                    ..Default::default()
                })
                .collect(),
            skills: self
                .skill_categories
                .iter()
                .map(|c| SkillGroup {
                    category: c.name.clone(),
                    items: c.skills.iter().map(|s| s.name.clone()).collect(),
                })
                .collect(),
            projects: vec![],
            certifications: vec![],
            layout,
        }
    }
}
