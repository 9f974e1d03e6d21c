use crate::{
    domain::responses::{DataResponse, ListResponse},
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderProductRow, RestaurantSalesRow, RoleCountRow, TopProductRow},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

#[async_trait]
pub trait ReportRepositoryTrait {
    async fn products_per_order(
        &self,
        id_pedido: i32,
    ) -> Result<Vec<OrderProductRow>, RepositoryError>;
    async fn top_selling(&self, min_units: i64) -> Result<Vec<TopProductRow>, RepositoryError>;
    async fn sales_per_restaurant(&self) -> Result<Vec<RestaurantSalesRow>, RepositoryError>;
    async fn orders_by_date(&self, fecha: NaiveDate) -> Result<Vec<Order>, RepositoryError>;
    async fn employees_by_role(&self, id_rest: i32)
    -> Result<Vec<RoleCountRow>, RepositoryError>;
}

pub type DynReportRepository = Arc<dyn ReportRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ReportServiceTrait {
    async fn products_per_order(
        &self,
        id_pedido: i32,
    ) -> Result<DataResponse<OrderProductRow>, ServiceError>;
    async fn top_selling(
        &self,
        unidades: Option<i64>,
    ) -> Result<ListResponse<TopProductRow>, ServiceError>;
    async fn sales_per_restaurant(&self) -> Result<ListResponse<RestaurantSalesRow>, ServiceError>;
    async fn orders_by_date(&self, fecha: NaiveDate) -> Result<ListResponse<Order>, ServiceError>;
    async fn employees_by_role(
        &self,
        id_rest: i32,
    ) -> Result<DataResponse<RoleCountRow>, ServiceError>;
}

pub type DynReportService = Arc<dyn ReportServiceTrait + Send + Sync>;
