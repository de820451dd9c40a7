use crate::catalog::find_template;
use crate::errors::AppError;
use crate::models::resume::ResumeInput;

const MAX_TITLE_LEN: usize = 200;

/// Rejects inputs that cannot be stored. Only structural problems are fatal.
pub fn validate_input(input: &ResumeInput) -> Result<(), AppError> {
    let title = input.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::Validation(format!(
            "title cannot exceed {MAX_TITLE_LEN} characters"
        )));
    }
    if find_template(&input.layout.template).is_none() {
        return Err(AppError::Validation(format!(
            "unknown template '{}'",
            input.layout.template
        )));
    }
    for (i, group) in input.skills.iter().enumerate() {
        if group.category.trim().is_empty() && !group.items.is_empty() {
            return Err(AppError::Validation(format!(
                "skills[{i}].category cannot be empty"
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct DateOrderWarning {
    pub section: &'static str,
    pub index: usize,
    pub description: String,
}

/// Advisory only: entries whose start date falls after their end date.
/// Saving proceeds regardless.
pub fn check_date_order(input: &ResumeInput) -> Vec<DateOrderWarning> {
    let mut warnings = Vec::new();

    for (index, exp) in input.experience.iter().enumerate() {
        if let (Some(start), Some(end)) = (exp.start_date, exp.end_date) {
            if start > end {
                warnings.push(DateOrderWarning {
                    section: "experience",
                    index,
                    description: format!(
                        "{} at {} starts {start} after it ends {end}",
                        exp.position, exp.company
                    ),
                });
            }
        }
    }
    for (index, edu) in input.education.iter().enumerate() {
        if let (Some(start), Some(end)) = (edu.start_date, edu.end_date) {
            if start > end {
                warnings.push(DateOrderWarning {
                    section: "education",
                    index,
                    description: format!("{} starts {start} after it ends {end}", edu.school),
                });
            }
        }
    }
    warnings
}
