use std::sync::Arc;

use crate::error::Result;
use crate::models::city::City;
use crate::repository::city::CityRepository;

#[derive(Clone)]
pub struct CityService {
    repo: Arc<dyn CityRepository>,
}

impl CityService {
    pub fn new(repo: Arc<dyn CityRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<City>> {
        self.repo.find_all().await
    }
}
