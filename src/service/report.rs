use crate::{
    abstract_trait::{DynReportRepository, ReportServiceTrait},
    domain::responses::{DataResponse, ListResponse},
    errors::ServiceError,
    model::{Order, OrderProductRow, RestaurantSalesRow, RoleCountRow, TopProductRow},
};
use async_trait::async_trait;
use chrono::NaiveDate;

pub struct ReportService {
    repository: DynReportRepository,
}

impl ReportService {
    pub fn new(repository: DynReportRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn products_per_order(
        &self,
        id_pedido: i32,
    ) -> Result<DataResponse<OrderProductRow>, ServiceError> {
        let rows = self
            .repository
            .products_per_order(id_pedido)
            .await
            .map_err(|e| ServiceError::database("Error al obtener productos del pedido", e))?;

        Ok(DataResponse { data: rows })
    }

    async fn top_selling(
        &self,
        unidades: Option<i64>,
    ) -> Result<ListResponse<TopProductRow>, ServiceError> {
        let Some(unidades) = unidades else {
            return Err(ServiceError::MissingFields(
                "Se debe especificar el número de unidades".to_string(),
            ));
        };

        let rows = self
            .repository
            .top_selling(unidades)
            .await
            .map_err(|e| ServiceError::database("Error al obtener productos más vendidos", e))?;

        if rows.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No se encontraron productos con más de {unidades} unidades vendidas"
            )));
        }

        Ok(ListResponse::new(rows))
    }

    async fn sales_per_restaurant(&self) -> Result<ListResponse<RestaurantSalesRow>, ServiceError> {
        let rows = self
            .repository
            .sales_per_restaurant()
            .await
            .map_err(|e| ServiceError::database("Error al obtener ventas por restaurante", e))?;

        Ok(ListResponse::new(rows))
    }

    async fn orders_by_date(&self, fecha: NaiveDate) -> Result<ListResponse<Order>, ServiceError> {
        let rows = self
            .repository
            .orders_by_date(fecha)
            .await
            .map_err(|e| ServiceError::database("Error al obtener pedidos por fecha", e))?;

        Ok(ListResponse::new(rows))
    }

    async fn employees_by_role(
        &self,
        id_rest: i32,
    ) -> Result<DataResponse<RoleCountRow>, ServiceError> {
        let rows = self
            .repository
            .employees_by_role(id_rest)
            .await
            .map_err(|e| ServiceError::database("Error al obtener empleados por rol", e))?;

        Ok(DataResponse { data: rows })
    }
}
