use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::city::City;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<City>>;
}

#[derive(Clone)]
pub struct SqlCityRepository {
    pool: PgPool,
}

impl SqlCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for SqlCityRepository {
    async fn find_all(&self) -> Result<Vec<City>> {
        let cities = sqlx::query_as::<_, City>("SELECT id, name FROM cities ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(cities)
    }
}
