use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Index row for an uploaded file; the content itself lives on disk at
/// `path`. Candidates and vacancies reference these rows by `file_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    pub id: i32,
    pub name: String,
    pub path: String,
}
