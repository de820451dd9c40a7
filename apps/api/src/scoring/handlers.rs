//! Axum route handlers for the Analytics API.

use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::document::ResumeData;
use crate::scoring::report::{analyze_resume, AnalyticsReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRequest {
    pub resume_data: ResumeData,
}

/// POST /api/v1/analytics
///
/// Scores an unsaved résumé snapshot. Regenerated on every call; nothing is stored.
pub async fn handle_analytics(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyticsRequest>,
) -> Result<Json<AnalyticsReport>, AppError> {
    Ok(Json(analyze_resume(&request.resume_data, &state.scoring)))
}

/// GET /api/v1/resumes/:id/analytics
pub async fn handle_resume_analytics(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    ApiPath(resume_id): ApiPath<Uuid>,
) -> Result<Json<AnalyticsReport>, AppError> {
    let record = state
        .store
        .find_by_id_and_owner(resume_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let data = ResumeData::from(&record);
    Ok(Json(analyze_resume(&data, &state.scoring)))
}
