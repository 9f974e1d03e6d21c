use crate::{
    abstract_trait::{DynHealthRepository, HealthServiceTrait},
    domain::responses::DbHealthResponse,
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::error;

pub struct HealthService {
    repository: DynHealthRepository,
}

impl HealthService {
    pub fn new(repository: DynHealthRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn check(&self) -> Result<DbHealthResponse, ServiceError> {
        let now = self.repository.check().await.map_err(|e| {
            error!("❌ Database connectivity probe failed: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(DbHealthResponse {
            status: "success".to_string(),
            time: now.to_rfc3339(),
        })
    }
}
