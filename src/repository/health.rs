use crate::{abstract_trait::HealthRepositoryTrait, config::ConnectionPool, errors::RepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::error;

pub struct HealthRepository {
    db: ConnectionPool,
}

impl HealthRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthRepositoryTrait for HealthRepository {
    async fn check(&self) -> Result<DateTime<Utc>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|err| {
            error!("❌ Database connectivity check failed: {err:?}");
            RepositoryError::from(err)
        })?;

        let (now,): (DateTime<Utc>,) = sqlx::query_as("SELECT NOW()")
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Database connectivity check failed: {err:?}");
                RepositoryError::from(err)
            })?;

        Ok(now)
    }
}
