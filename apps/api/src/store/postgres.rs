use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord, ResumeRow};
use crate::store::ResumeStore;

/// PostgreSQL-backed store; nested sections live in JSONB columns.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner: Uuid,
    ) -> Result<Option<ResumeRecord>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(ResumeRecord::from))
    }

    async fn find_all_by_owner(&self, owner: Uuid) -> Result<Vec<ResumeRecord>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC, id",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(ResumeRecord::from).collect())
    }

    async fn create(&self, owner: Uuid, input: ResumeInput) -> Result<ResumeRecord, AppError> {
        let record = ResumeRecord::new(owner, input);

        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes
                (id, user_id, title, personal, experience, education, skills,
                 projects, certifications, layout, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(record.user_id)
        .bind(&record.title)
        .bind(Json(&record.personal))
        .bind(Json(&record.experience))
        .bind(Json(&record.education))
        .bind(Json(&record.skills))
        .bind(Json(&record.projects))
        .bind(Json(&record.certifications))
        .bind(Json(&record.layout))
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await?;

        info!("Created resume {} for user {}", row.id, owner);
        Ok(row.into())
    }

    async fn update(
        &self,
        id: Uuid,
        owner: Uuid,
        input: ResumeInput,
    ) -> Result<Option<ResumeRecord>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET title = $3, personal = $4, experience = $5, education = $6,
                skills = $7, projects = $8, certifications = $9, layout = $10,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(&input.title)
        .bind(Json(&input.personal))
        .bind(Json(&input.experience))
        .bind(Json(&input.education))
        .bind(Json(&input.skills))
        .bind(Json(&input.projects))
        .bind(Json(&input.certifications))
        .bind(Json(&input.layout))
        .fetch_optional(&self.pool)
        .await?;

        if row.is_some() {
            info!("Updated resume {id} for user {owner}");
        }
        Ok(row.map(ResumeRecord::from))
    }

    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted resume {id} for user {owner}");
        }
        Ok(deleted)
    }
}
