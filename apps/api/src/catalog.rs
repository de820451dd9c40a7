//! Static template catalog.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub sections: &'static [&'static str],
    pub preview_image: &'static str,
}

pub const TEMPLATES: &[TemplateInfo] = &[
    TemplateInfo {
        id: "modern",
        name: "Modern Professional",
        description: "A clean and modern design perfect for tech professionals",
        sections: &["header", "summary", "experience", "education", "skills", "projects"],
        preview_image: "/templates/modern.png",
    },
    TemplateInfo {
        id: "classic",
        name: "Classic Traditional",
        description: "Traditional layout ideal for conservative industries",
        sections: &["header", "experience", "education", "skills", "references"],
        preview_image: "/templates/classic.png",
    },
    TemplateInfo {
        id: "creative",
        name: "Creative Portfolio",
        description: "Creative design for artists and designers",
        sections: &["header", "portfolio", "experience", "skills", "education"],
        preview_image: "/templates/creative.png",
    },
];

pub fn find_template(id: &str) -> Option<&'static TemplateInfo> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<&'static [TemplateInfo]> {
    Json(TEMPLATES)
}
