use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub city_id: i32,
    pub file_id: i32,
}

impl Candidate {
    /// A candidate as it arrives from the creation or edit form. The file id
    /// is attached by the service once the upload has been stored.
    pub fn new(id: i32, name: String, description: String, city_id: i32) -> Self {
        Self {
            id,
            name,
            description,
            creation_date: Utc::now(),
            city_id,
            file_id: 0,
        }
    }
}
