use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, ListResponse, OrderWithDetailsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderDetailProduct},
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_details(&self, id: i32) -> Result<Vec<OrderDetailProduct>, RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError>;

    /// Updates scalar fields and replaces all line items inside one
    /// transaction. `None` when the order does not exist.
    async fn update_with_details(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<Option<Order>, RepositoryError>;

    /// Deletes the order's line items and then the order row inside one
    /// transaction. `None` when the order did not exist.
    async fn delete_cascade(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
}

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderServiceTrait {
    async fn create(&self, req: &CreateOrderRequest) -> Result<ApiResponse<Order>, ServiceError>;
    async fn find_all(&self) -> Result<ListResponse<Order>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<OrderWithDetailsResponse, ServiceError>;
    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<Order>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<Order>, ServiceError>;
}

pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;
