use crate::{
    domain::{
        requests::{CreateOrderDetailRequest, UpdateOrderDetailRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{OrderDetail, OrderLineSummary},
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait OrderDetailQueryRepositoryTrait {
    async fn find_by_order(&self, id_pedido: i32)
    -> Result<Vec<OrderLineSummary>, RepositoryError>;
    async fn exists(&self, id_detalle: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait OrderDetailCommandRepositoryTrait {
    async fn create(&self, req: &CreateOrderDetailRequest)
    -> Result<OrderDetail, RepositoryError>;
    async fn update(
        &self,
        id_detalle: i32,
        req: &UpdateOrderDetailRequest,
    ) -> Result<Option<OrderDetail>, RepositoryError>;
    async fn delete(&self, id_detalle: i32) -> Result<Option<OrderDetail>, RepositoryError>;
}

pub type DynOrderDetailQueryRepository = Arc<dyn OrderDetailQueryRepositoryTrait + Send + Sync>;
pub type DynOrderDetailCommandRepository = Arc<dyn OrderDetailCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderDetailServiceTrait {
    async fn create(
        &self,
        req: &CreateOrderDetailRequest,
    ) -> Result<ApiResponse<OrderDetail>, ServiceError>;
    async fn find_by_order(
        &self,
        id_pedido: i32,
    ) -> Result<ListResponse<OrderLineSummary>, ServiceError>;
    async fn update(
        &self,
        id_detalle: i32,
        req: &UpdateOrderDetailRequest,
    ) -> Result<ApiResponse<OrderDetail>, ServiceError>;
    async fn delete(&self, id_detalle: i32) -> Result<ApiResponse<OrderDetail>, ServiceError>;
}

pub type DynOrderDetailService = Arc<dyn OrderDetailServiceTrait + Send + Sync>;
