//! Axum route handlers for the Export API.

use axum::{extract::State, Extension};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::export::{export_resume, ExportFormat, ExportedDocument};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::models::document::ResumeData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub format: String,
    pub resume_data: ResumeData,
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub format: String,
}

/// POST /api/v1/export
///
/// Renders the posted snapshot and returns it as an attachment.
pub async fn handle_export(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ExportRequest>,
) -> Result<ExportedDocument, AppError> {
    let format: ExportFormat = request.format.parse()?;
    export_resume(format, &request.resume_data, state.pdf_renderer.as_ref()).await
}

/// GET /api/v1/resumes/:id/export?format=pdf|docx
pub async fn handle_export_saved(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    ApiPath(resume_id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ExportQuery>,
) -> Result<ExportedDocument, AppError> {
    let format: ExportFormat = query.format.parse()?;

    let record = state
        .store
        .find_by_id_and_owner(resume_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    export_resume(format, &ResumeData::from(&record), state.pdf_renderer.as_ref()).await
}
