use crate::domain::repository::UserRepository;
use crate::domain::user::NewUser;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

const INSERT_USER: &str = "INSERT INTO users (username, email) VALUES ($1, $2)";

/// Writes into the externally managed `users` table. The schema (keys,
/// timestamps, constraints) belongs to the database, not to this crate.
#[derive(Clone, Debug)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self), fields(username = %user.username, email = %user.email))]
    async fn insert_user(&self, user: &NewUser) -> Result<()> {
        let result = sqlx::query(INSERT_USER)
            .bind(user.username.as_str())
            .bind(user.email.as_str())
            .execute(&self.pool)
            .await
            .context("Failed to insert user into users table")?;
        debug!(rows_affected = result.rows_affected(), "User row inserted");
        Ok(())
    }
}
