use std::sync::Arc;

use tracing::warn;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::candidate::Candidate;
use crate::repository::candidate::CandidateRepository;
use crate::services::file_service::FileService;

#[derive(Clone)]
pub struct CandidateService {
    repo: Arc<dyn CandidateRepository>,
    files: Arc<dyn FileService>,
}

impl CandidateService {
    pub fn new(repo: Arc<dyn CandidateRepository>, files: Arc<dyn FileService>) -> Self {
        Self { repo, files }
    }

    /// Two-phase save: the upload is stored first so its id can be attached
    /// to the candidate; if the row insert then fails the file is removed
    /// again.
    pub async fn save(&self, mut candidate: Candidate, file: FileDto) -> Result<Candidate> {
        let stored = self.files.save(file).await?;
        candidate.file_id = stored.id;
        match self.repo.save(candidate).await {
            Ok(saved) => Ok(saved),
            Err(e) => {
                self.discard_file(stored.id).await;
                Err(e)
            }
        }
    }

    /// Same file-then-entity order as `save`. A false result means no row
    /// matched the id; the freshly stored file is removed again in that case
    /// and when the update itself fails.
    pub async fn update(&self, mut candidate: Candidate, file: FileDto) -> Result<bool> {
        let stored = self.files.save(file).await?;
        candidate.file_id = stored.id;
        match self.repo.update(&candidate).await {
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
        let Some(candidate) = self.repo.find_by_id(id).await? else {
            return Ok(false);
        };
        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            self.files.delete_by_id(candidate.file_id).await?;
        }
        Ok(deleted)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Candidate>> {
        self.repo.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Result<Vec<Candidate>> {
        self.repo.find_all().await
    }

    async fn discard_file(&self, file_id: i32) {
        if let Err(e) = self.files.delete_by_id(file_id).await {
            warn!(file_id, error = %e, "failed to remove file after aborted candidate write");
        }
    }
}
