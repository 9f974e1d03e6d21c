use crate::{
    domain::{
        requests::{CreateRestaurantRequest, UpdateRestaurantRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Restaurant,
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait RestaurantQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Restaurant>, RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait RestaurantCommandRepositoryTrait {
    async fn create(&self, req: &CreateRestaurantRequest) -> Result<Restaurant, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateRestaurantRequest,
    ) -> Result<Option<Restaurant>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<Option<Restaurant>, RepositoryError>;
}

pub type DynRestaurantQueryRepository = Arc<dyn RestaurantQueryRepositoryTrait + Send + Sync>;
pub type DynRestaurantCommandRepository = Arc<dyn RestaurantCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RestaurantServiceTrait {
    async fn create(
        &self,
        req: &CreateRestaurantRequest,
    ) -> Result<ApiResponse<Restaurant>, ServiceError>;
    async fn find_all(&self) -> Result<ListResponse<Restaurant>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateRestaurantRequest,
    ) -> Result<ApiResponse<Restaurant>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<Restaurant>, ServiceError>;
}

pub type DynRestaurantService = Arc<dyn RestaurantServiceTrait + Send + Sync>;
