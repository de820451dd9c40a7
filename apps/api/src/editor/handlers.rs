//! HTTP surface for the editor: apply one action to a posted state, or save a
//! finished edit session as a new résumé.

use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::editor::{apply, EditorAction, EditorState};
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::models::resume::ResumeRecord;
use crate::resumes::validation::validate_input;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    #[serde(default)]
    pub state: EditorState,
    pub action: EditorAction,
}

#[derive(Debug, Deserialize)]
pub struct SaveDraftRequest {
    pub title: String,
    #[serde(default)]
    pub state: EditorState,
}

/// POST /api/v1/editor/apply
pub async fn handle_apply(
    ApiJson(request): ApiJson<ApplyRequest>,
) -> Result<Json<EditorState>, AppError> {
    Ok(Json(apply(&request.state, request.action)))
}

/// POST /api/v1/editor/save
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    ApiJson(request): ApiJson<SaveDraftRequest>,
) -> Result<(StatusCode, Json<ResumeRecord>), AppError> {
    let input = request.state.to_resume_input(&request.title);
    validate_input(&input)?;

    let record = state.store.create(user_id, input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
