//! HTML rendition of a résumé, fed to the PDF renderer. Values are escaped by
//! the template engine.

use askama::Template;

use crate::models::document::ResumeData;

struct JobBlock<'a> {
    heading: String,
    details: String,
    bullets: &'a [String],
}

struct SchoolBlock {
    heading: String,
    details: String,
}

#[derive(Template)]
#[template(path = "resume.html")]
struct ResumeTemplate<'a> {
    name: &'a str,
    contact: String,
    summary: &'a str,
    jobs: Vec<JobBlock<'a>>,
    schools: Vec<SchoolBlock>,
    skills: &'a [String],
}

pub fn render_html(data: &ResumeData) -> Result<String, askama::Error> {
    let jobs = data
        .experience
        .iter()
        .map(|exp| JobBlock {
            heading: format!("{} - {}", exp.title, exp.company),
            details: format!("{} | {} - {}", exp.location, exp.start_date, exp.end_date),
            bullets: &exp.description,
        })
        .collect();

    let schools = data
        .education
        .iter()
        .map(|edu| {
            let mut details = format!("{} | {}", edu.location, edu.graduation_date);
            if let Some(gpa) = edu.gpa() {
                details.push_str(&format!(" | GPA: {gpa}"));
            }
            SchoolBlock {
                heading: format!("{} - {}", edu.degree, edu.school),
                details,
            }
        })
        .collect();

    ResumeTemplate {
        name: &data.personal_info.name,
        contact: data.contact_line(),
        summary: &data.personal_info.summary,
        jobs,
        schools,
        skills: &data.skills,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{EducationEntry, ExperienceEntry, PersonalInfo};

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Linus <T>".to_string(),
                email: "l@example.com".to_string(),
                phone: "555-0100".to_string(),
                location: "Portland".to_string(),
                summary: "Kernel maintainer".to_string(),
            },
            experience: vec![ExperienceEntry {
                title: "Maintainer".to_string(),
                company: "Linux Foundation".to_string(),
                location: "Remote".to_string(),
                start_date: "2003".to_string(),
                end_date: "Present".to_string(),
                description: vec!["Merged patches".to_string(), "Cut releases".to_string()],
            }],
            education: vec![EducationEntry {
                degree: "MSc".to_string(),
                school: "University of Helsinki".to_string(),
                location: "Helsinki".to_string(),
                graduation_date: "1996".to_string(),
                gpa: Some("4.0".to_string()),
            }],
            skills: vec!["C".to_string(), "Git".to_string()],
        }
    }

    #[test]
    fn test_html_contains_every_section() {
        let html = render_html(&sample()).unwrap();
        assert!(html.contains("l@example.com | 555-0100 | Portland"));
        assert!(html.contains("Maintainer - Linux Foundation"));
        assert!(html.contains("Remote | 2003 - Present"));
        assert!(html.contains("<li>Merged patches</li>"));
        assert!(html.contains("MSc - University of Helsinki"));
        assert!(html.contains("Helsinki | 1996 | GPA: 4.0"));
        assert!(html.contains(r#"<span class="skill-item">Git</span>"#));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let html = render_html(&sample()).unwrap();
        assert!(html.contains("Linus &lt;T&gt;"));
        assert!(!html.contains("Linus <T>"));
    }

    #[test]
    fn test_empty_sections_render() {
        let mut data = sample();
        data.experience.clear();
        data.skills.clear();
        let html = render_html(&data).unwrap();
        assert!(html.contains("<h2>Professional Experience</h2>"));
        assert!(!html.contains("skill-item\">"));
    }

    #[test]
    fn test_blank_gpa_prints_no_suffix() {
        let mut data = sample();
        data.education[0].gpa = Some(String::new());
        let html = render_html(&data).unwrap();
        assert!(html.contains("Helsinki | 1996"));
        assert!(!html.contains("GPA:"));

        data.education[0].gpa = None;
        assert!(!render_html(&data).unwrap().contains("GPA:"));
    }
}
