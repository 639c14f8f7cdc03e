use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::warn;
use uuid::Uuid;

use crate::dto::file_dto::FileDto;
use crate::error::Result;
use crate::models::file::StoredFile;
use crate::repository::file::FileRepository;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileService: Send + Sync {
    async fn save(&self, file: FileDto) -> Result<StoredFile>;
    async fn get_file_by_id(&self, id: i32) -> Result<Option<FileDto>>;
    async fn delete_by_id(&self, id: i32) -> Result<bool>;
}

/// Stores uploaded content on disk under a generated name and keeps an
/// index row per file in the `files` table.
pub struct DiskFileService {
    repo: Arc<dyn FileRepository>,
    storage_dir: PathBuf,
}

impl DiskFileService {
    pub fn new(repo: Arc<dyn FileRepository>, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo,
            storage_dir: storage_dir.into(),
        }
    }

    fn new_file_path(&self, source_name: &str) -> PathBuf {
        let ext = Path::new(source_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin");
        self.storage_dir.join(format!("{}.{}", Uuid::new_v4(), ext))
    }
}

#[async_trait]
impl FileService for DiskFileService {
    async fn save(&self, file: FileDto) -> Result<StoredFile> {
        fs::create_dir_all(&self.storage_dir).await?;
        let path = self.new_file_path(&file.name);
        fs::write(&path, &file.content).await?;
        let path_str = path.to_string_lossy().into_owned();
        match self.repo.save(&file.name, &path_str).await {
            Ok(stored) => Ok(stored),
            Err(e) => {
                // content is on disk but the index insert failed; remove it
                // again so no unreferenced file is left behind
                if let Err(cleanup) = fs::remove_file(&path).await {
                    warn!(path = %path_str, error = %cleanup, "failed to remove file after aborted save");
                }
                Err(e)
            }
        }
    }

    async fn get_file_by_id(&self, id: i32) -> Result<Option<FileDto>> {
        let Some(stored) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let content = fs::read(&stored.path).await?;
        Ok(Some(FileDto {
            name: stored.name,
            content: Bytes::from(content),
        }))
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool> {
        let Some(stored) = self.repo.find_by_id(id).await? else {
            return Ok(false);
        };
        let removed = self.repo.delete_by_id(id).await?;
        if removed {
            if let Err(e) = fs::remove_file(&stored.path).await {
                warn!(path = %stored.path, error = %e, "failed to remove stored file content");
            }
        }
        Ok(removed)
    }
}
