use crate::{
    domain::responses::DbHealthResponse,
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[async_trait]
pub trait HealthRepositoryTrait {
    /// Runs a trivial query and returns the database's current timestamp.
    async fn check(&self) -> Result<DateTime<Utc>, RepositoryError>;
}

pub type DynHealthRepository = Arc<dyn HealthRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait HealthServiceTrait {
    async fn check(&self) -> Result<DbHealthResponse, ServiceError>;
}

pub type DynHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;
