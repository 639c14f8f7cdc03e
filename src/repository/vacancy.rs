use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::vacancy::Vacancy;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VacancyRepository: Send + Sync {
    async fn save(&self, vacancy: Vacancy) -> Result<Vacancy>;
    async fn update(&self, vacancy: &Vacancy) -> Result<bool>;
    async fn delete_by_id(&self, id: i32) -> Result<bool>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>>;
    async fn find_all(&self) -> Result<Vec<Vacancy>>;
}

#[derive(Clone)]
pub struct SqlVacancyRepository {
    pool: PgPool,
}

impl SqlVacancyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VacancyRepository for SqlVacancyRepository {
    async fn save(&self, vacancy: Vacancy) -> Result<Vacancy> {
        let saved = sqlx::query_as::<_, Vacancy>(
            r#"
            INSERT INTO vacancies (title, description, creation_date, visible, city_id, file_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, creation_date, visible, city_id, file_id
            "#,
        )
        .bind(&vacancy.title)
        .bind(&vacancy.description)
        .bind(vacancy.creation_date)
        .bind(vacancy.visible)
        .bind(vacancy.city_id)
        .bind(vacancy.file_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn update(&self, vacancy: &Vacancy) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE vacancies
            SET title = $2, description = $3, visible = $4, city_id = $5, file_id = $6
            WHERE id = $1
            "#,
        )
        .bind(vacancy.id)
        .bind(&vacancy.title)
        .bind(&vacancy.description)
        .bind(vacancy.visible)
        .bind(vacancy.city_id)
        .bind(vacancy.file_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM vacancies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        let vacancy = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, title, description, creation_date, visible, city_id, file_id
            FROM vacancies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(vacancy)
    }

    async fn find_all(&self) -> Result<Vec<Vacancy>> {
        let vacancies = sqlx::query_as::<_, Vacancy>(
            r#"
            SELECT id, title, description, creation_date, visible, city_id, file_id
            FROM vacancies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(vacancies)
    }
}
