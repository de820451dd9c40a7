//! Pure state transitions for the editor. `apply` never mutates its input and
//! has no effect beyond producing the next state. Updates or deletes that
//! name an absent id leave the state unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::editor::state::{
    EditorEducation, EditorExperience, EditorState, EducationDraft, ExperienceDraft, Skill,
    SkillCategory, SkillDraft,
};

/// Absent leaves the date alone; `null` or `""` clears it.
fn clearable_date<'de, D>(de: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(de)?.as_deref().map(str::trim) {
        None | Some("") => Ok(Some(None)),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|d| Some(Some(d)))
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "clearable_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        deserialize_with = "clearable_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<Option<NaiveDate>>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    #[serde(
        default,
        deserialize_with = "clearable_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub graduation_date: Option<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    pub theme: Option<String>,
    pub font: Option<String>,
    pub spacing: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum EditorAction {
    UpdatePersonal(PersonalPatch),
    AddExperience(ExperienceDraft),
    UpdateExperience { id: Uuid, data: ExperiencePatch },
    DeleteExperience(Uuid),
    AddEducation(EducationDraft),
    UpdateEducation { id: Uuid, data: EducationPatch },
    DeleteEducation(Uuid),
    AddSkillCategory { name: String },
    AddSkill { category_id: Uuid, skill: SkillDraft },
    UpdateSkill { category_id: Uuid, skill_id: Uuid, data: SkillPatch },
    DeleteSkill { category_id: Uuid, skill_id: Uuid },
    UpdateTemplate(String),
    UpdateStyle(StylePatch),
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Returns the state that results from applying `action` to `state`.
pub fn apply(state: &EditorState, action: EditorAction) -> EditorState {
    let mut next = state.clone();

    match action {
        EditorAction::UpdatePersonal(patch) => {
            let p = &mut next.personal;
            set(&mut p.name, patch.name);
            set(&mut p.email, patch.email);
            set(&mut p.phone, patch.phone);
            set(&mut p.location, patch.location);
            set(&mut p.website, patch.website);
            set(&mut p.summary, patch.summary);
        }
        EditorAction::AddExperience(draft) => {
            next.experience
                .push(EditorExperience::from_draft(Uuid::new_v4(), draft));
        }
        EditorAction::UpdateExperience { id, data } => {
            if let Some(exp) = next.experience.iter_mut().find(|e| e.id == id) {
                set(&mut exp.company, data.company);
                set(&mut exp.position, data.position);
                set(&mut exp.location, data.location);
                set(&mut exp.start_date, data.start_date);
                set(&mut exp.end_date, data.end_date);
                set(&mut exp.current, data.current);
                set(&mut exp.description, data.description);
            }
        }
        EditorAction::DeleteExperience(id) => next.experience.retain(|e| e.id != id),
        EditorAction::AddEducation(draft) => {
            next.education
                .push(EditorEducation::from_draft(Uuid::new_v4(), draft));
        }
        EditorAction::UpdateEducation { id, data } => {
            if let Some(edu) = next.education.iter_mut().find(|e| e.id == id) {
                set(&mut edu.school, data.school);
                set(&mut edu.degree, data.degree);
                set(&mut edu.field, data.field);
                set(&mut edu.graduation_date, data.graduation_date);
            }
        }
        EditorAction::DeleteEducation(id) => next.education.retain(|e| e.id != id),
        EditorAction::AddSkillCategory { name } => next.skill_categories.push(SkillCategory {
            id: Uuid::new_v4(),
            name,
            skills: vec![],
        }),
        EditorAction::AddSkill { category_id, skill } => {
            if let Some(category) = next.skill_categories.iter_mut().find(|c| c.id == category_id) {
                category.skills.push(Skill {
                    id: Uuid::new_v4(),
                    name: skill.name,
                    level: skill.level,
                });
            }
        }
        EditorAction::UpdateSkill {
            category_id,
            skill_id,
            data,
        } => {
            if let Some(skill) = next
                .skill_categories
                .iter_mut()
                .find(|c| c.id == category_id)
                .and_then(|c| c.skills.iter_mut().find(|s| s.id == skill_id))
            {
                set(&mut skill.name, data.name);
                set(&mut skill.level, data.level);
            }
        }
        EditorAction::DeleteSkill {
            category_id,
            skill_id,
        } => {
            if let Some(category) = next.skill_categories.iter_mut().find(|c| c.id == category_id) {
                category.skills.retain(|s| s.id != skill_id);
            }
        }
        EditorAction::UpdateTemplate(template) => next.style.template = template,
        EditorAction::UpdateStyle(patch) => {
            set(&mut next.style.theme, patch.theme);
            set(&mut next.style.font, patch.font);
            set(&mut next.style.spacing, patch.spacing);
        }
    }

    next
}
