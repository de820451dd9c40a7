pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth;
use crate::catalog::handle_list_templates;
use crate::editor::handlers::{handle_apply, handle_save_draft};
use crate::export::handlers::{handle_export, handle_export_saved};
use crate::resumes::handlers::{
    handle_create_resume, handle_delete_resume, handle_get_resume, handle_list_resumes,
    handle_update_resume,
};
use crate::scoring::handlers::{handle_analytics, handle_resume_analytics};
use crate::state::AppState;
use crate::suggestions::handle_suggestions;

pub fn build_router(state: AppState) -> Router {
    // Everything under /api/v1 requires a caller identity.
    let api = Router::new()
        // Resume CRUD
        .route("/resumes", get(handle_list_resumes).post(handle_create_resume))
        .route(
            "/resumes/:id",
            get(handle_get_resume)
                .put(handle_update_resume)
                .delete(handle_delete_resume),
        )
        .route("/resumes/:id/analytics", get(handle_resume_analytics))
        .route("/resumes/:id/export", get(handle_export_saved))
        // Snapshot operations
        .route("/analytics", post(handle_analytics))
        .route("/export", post(handle_export))
        .route("/suggestions", post(handle_suggestions))
        .route("/templates", get(handle_list_templates))
        // Editor session
        .route("/editor/apply", post(handle_apply))
        .route("/editor/save", post(handle_save_draft))
        .route_layer(middleware::from_fn(auth::authenticate));

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1", api)
        .with_state(state)
}
