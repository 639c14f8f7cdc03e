use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::file::StoredFile;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn save(&self, name: &str, path: &str) -> Result<StoredFile>;
    async fn find_by_id(&self, id: i32) -> Result<Option<StoredFile>>;
    async fn delete_by_id(&self, id: i32) -> Result<bool>;
}

#[derive(Clone)]
pub struct SqlFileRepository {
    pool: PgPool,
}

impl SqlFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileRepository for SqlFileRepository {
    async fn save(&self, name: &str, path: &str) -> Result<StoredFile> {
        let saved = sqlx::query_as::<_, StoredFile>(
            r#"
            INSERT INTO files (name, path)
            VALUES ($1, $2)
            RETURNING id, name, path
            "#,
        )
        .bind(name)
        .bind(path)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StoredFile>> {
        let file = sqlx::query_as::<_, StoredFile>(
            r#"
            SELECT id, name, path
            FROM files
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(file)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
