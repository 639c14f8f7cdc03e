use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub visible: bool,
    pub city_id: i32,
    pub file_id: i32,
}

impl Vacancy {
    pub fn new(id: i32, title: String, description: String, visible: bool, city_id: i32) -> Self {
        Self {
            id,
            title,
            description,
            creation_date: Utc::now(),
            visible,
            city_id,
            file_id: 0,
        }
    }
}
