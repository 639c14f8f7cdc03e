use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::candidate::Candidate;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn save(&self, candidate: Candidate) -> Result<Candidate>;
    async fn update(&self, candidate: &Candidate) -> Result<bool>;
    async fn delete_by_id(&self, id: i32) -> Result<bool>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>>;
    async fn find_all(&self) -> Result<Vec<Candidate>>;
}

#[derive(Clone)]
pub struct SqlCandidateRepository {
    pool: PgPool,
}

impl SqlCandidateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for SqlCandidateRepository {
    async fn save(&self, candidate: Candidate) -> Result<Candidate> {
        let saved = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (name, description, creation_date, city_id, file_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, creation_date, city_id, file_id
            "#,
        )
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(candidate.creation_date)
        .bind(candidate.city_id)
        .bind(candidate.file_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn update(&self, candidate: &Candidate) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE candidates
            SET name = $2, description = $3, city_id = $4, file_id = $5
            WHERE id = $1
            "#,
        )
        .bind(candidate.id)
        .bind(&candidate.name)
        .bind(&candidate.description)
        .bind(candidate.city_id)
        .bind(candidate.file_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM candidates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        let candidate = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, description, creation_date, city_id, file_id
            FROM candidates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(candidate)
    }

    async fn find_all(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, description, creation_date, city_id, file_id
            FROM candidates
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }
}
