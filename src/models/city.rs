use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read-only reference data seeded by the migrations; populates the city
/// selection lists on the candidate and vacancy forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct City {
    pub id: i32,
    pub name: String,
}
