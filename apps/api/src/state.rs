use std::sync::Arc;

use crate::config::Config;
use crate::export::pdf::PdfRenderer;
use crate::scoring::ScoringWeights;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Postgres in production, in-memory when DATABASE_URL is unset.
    pub store: Arc<dyn ResumeStore>,
    pub pdf_renderer: Arc<dyn PdfRenderer>,
    pub scoring: ScoringWeights,
    #[allow(dead_code)]
    pub config: Config,
}
