use crate::domain::error::DomainError;
use crate::domain::repository::UserRepository;
use crate::domain::user::NewUser;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const DEFAULT_INSERT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    insert_timeout: Duration,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>, insert_timeout: Duration) -> Self {
        Self {
            repository,
            insert_timeout,
        }
    }

    /// Validates the request and performs exactly one insert, bounded by the
    /// insert timeout. Dropping the returned future (client went away)
    /// aborts the insert as well.
    #[instrument(skip(self, user), fields(username = %user.username))]
    pub async fn create_user(&self, user: NewUser) -> Result<()> {
        user.validate()?;

        match tokio::time::timeout(self.insert_timeout, self.repository.insert_user(&user)).await
        {
            Ok(result) => result?,
            Err(_) => {
                warn!(timeout = ?self.insert_timeout, "User insert timed out");
                return Err(DomainError::Timeout(self.insert_timeout).into());
            }
        }

        info!(username = %user.username, email = %user.email, "User created");
        Ok(())
    }
}
