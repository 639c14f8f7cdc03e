use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::repository::user::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Registers a user unless the email is already taken, in which case
    /// `None` is returned. The unique index on `users.email` backs this up;
    /// a violation slipping through the pre-check maps to `None` as well.
    pub async fn save(&self, user: User) -> Result<Option<User>> {
        if self.repo.find_by_email(&user.email).await?.is_some() {
            return Ok(None);
        }
        match self.repo.save(user).await {
            Ok(saved) => Ok(Some(saved)),
            Err(Error::Database(e)) if is_unique_violation(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.repo.find_by_email_and_password(email, password).await
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
        .unwrap_or(false)
}
