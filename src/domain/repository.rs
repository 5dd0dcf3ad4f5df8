use crate::domain::user::NewUser;
use anyhow::Result;
use async_trait::async_trait;

/// Storage seam for user rows. Implementations must be safe to share
/// across concurrent requests.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert_user(&self, user: &NewUser) -> Result<()>;
}
