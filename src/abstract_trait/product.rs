use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
}

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn create(&self, req: &CreateProductRequest)
    -> Result<ApiResponse<Product>, ServiceError>;
    async fn find_all(&self) -> Result<ListResponse<Product>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<Product>, ServiceError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;
