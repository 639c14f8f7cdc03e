use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// At most one user exists per email; the repository enforces this with a
/// unique index and the service refuses duplicates before insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password: String,
}
