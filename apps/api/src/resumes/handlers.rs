//! Axum route handlers for the Resume API.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::models::resume::{ResumeInput, ResumePatch, ResumeRecord};
use crate::resumes::validation::{check_date_order, validate_input};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

fn not_found() -> AppError {
    AppError::NotFound("Resume not found".to_string())
}

fn log_date_warnings(input: &ResumeInput) {
    for w in check_date_order(input) {
        warn!("Date order advisory on {}[{}]: {}", w.section, w.index, w.description);
    }
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    Ok(Json(state.store.find_all_by_owner(user_id).await?))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    ApiJson(input): ApiJson<ResumeInput>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    validate_input(&input)?;
    log_date_warnings(&input);

    let record = state.store.create(user_id, input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    ApiPath(resume_id): ApiPath<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    state
        .store
        .find_by_id_and_owner(resume_id, user_id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// PUT /api/v1/resumes/:id
///
/// Sections omitted from the body keep their stored values; last write wins.
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    ApiPath(resume_id): ApiPath<Uuid>,
    ApiJson(patch): ApiJson<ResumePatch>,
) -> Result<Json<ResumeRecord>, AppError> {
    let current = state
        .store
        .find_by_id_and_owner(resume_id, user_id)
        .await?
        .ok_or_else(not_found)?;

    let input = patch.merge_onto(&current);
    validate_input(&input)?;
    log_date_warnings(&input);

    state
        .store
        .update(resume_id, user_id, input)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    ApiPath(resume_id): ApiPath<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !state.store.delete(resume_id, user_id).await? {
        return Err(not_found());
    }
    Ok(Json(DeleteResponse {
        message: "Resume deleted successfully".to_string(),
    }))
}
