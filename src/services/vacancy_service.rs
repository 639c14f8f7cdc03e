use std::sync::Arc;

use tracing::warn;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::vacancy::Vacancy;
use crate::repository::vacancy::VacancyRepository;
use crate::services::file_service::FileService;

#[derive(Clone)]
pub struct VacancyService {
    repo: Arc<dyn VacancyRepository>,
    files: Arc<dyn FileService>,
}

impl VacancyService {
    pub fn new(repo: Arc<dyn VacancyRepository>, files: Arc<dyn FileService>) -> Self {
        Self { repo, files }
    }

    pub async fn save(&self, mut vacancy: Vacancy, file: FileDto) -> Result<Vacancy> {
        let stored = self.files.save(file).await?;
        vacancy.file_id = stored.id;
        match self.repo.save(vacancy).await {
            Ok(saved) => Ok(saved),
            Err(e) => {
                self.discard_file(stored.id).await;
                Err(e)
            }
        }
    }

    pub async fn update(&self, mut vacancy: Vacancy, file: FileDto) -> Result<bool> {
        let stored = self.files.save(file).await?;
        vacancy.file_id = stored.id;
        match self.repo.update(&vacancy).await {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.discard_file(stored.id).await;
                Ok(false)
            }
            Err(e) => {
                self.discard_file(stored.id).await;
                Err(e)
            }
        }
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let Some(vacancy) = self.repo.find_by_id(id).await? else {
            return Ok(false);
        };
        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            self.files.delete_by_id(vacancy.file_id).await?;
        }
        Ok(deleted)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vacancy>> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Vacancy>> {
        self.repo.find_all().await
    }

    async fn discard_file(&self, file_id: i32) {
        if let Err(e) = self.files.delete_by_id(file_id).await {
            warn!(file_id, error = %e, "failed to remove file after aborted vacancy write");
        }
    }
}
