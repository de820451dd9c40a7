//! Résumé persistence: a trait seam over the record store.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`: `PgResumeStore` in production,
//! `MemoryResumeStore` when no database is configured and in tests.
//! Every lookup is scoped by owner; a record belonging to someone else is
//! indistinguishable from a missing one.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord};

pub mod memory;
pub mod postgres;

pub use memory::MemoryResumeStore;
pub use postgres::PgResumeStore;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner: Uuid,
    ) -> Result<Option<ResumeRecord>, AppError>;

    async fn find_all_by_owner(&self, owner: Uuid) -> Result<Vec<ResumeRecord>, AppError>;

    async fn create(&self, owner: Uuid, input: ResumeInput) -> Result<ResumeRecord, AppError>;

    /// Returns `None` when `id` does not resolve under `owner`.
    async fn update(
        &self,
        id: Uuid,
        owner: Uuid,
        input: ResumeInput,
    ) -> Result<Option<ResumeRecord>, AppError>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError>;
}
