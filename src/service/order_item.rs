use crate::{
    abstract_trait::{
        DynOrderDetailCommandRepository, DynOrderDetailQueryRepository, DynOrderQueryRepository,
        DynProductQueryRepository, OrderDetailServiceTrait,
    },
    domain::{
        requests::{CreateOrderDetailRequest, UpdateOrderDetailRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::ServiceError,
    model::{OrderDetail, OrderLineSummary},
};
use async_trait::async_trait;
use tracing::error;

pub struct OrderDetailService {
    order_query: DynOrderQueryRepository,
    product_query: DynProductQueryRepository,
    query: DynOrderDetailQueryRepository,
    command: DynOrderDetailCommandRepository,
}

pub struct OrderDetailServiceDeps {
    pub order_query: DynOrderQueryRepository,
    pub product_query: DynProductQueryRepository,
    pub query: DynOrderDetailQueryRepository,
    pub command: DynOrderDetailCommandRepository,
}

impl OrderDetailService {
    pub fn new(deps: OrderDetailServiceDeps) -> Self {
        let OrderDetailServiceDeps {
            order_query,
            product_query,
            query,
            command,
        } = deps;

        Self {
            order_query,
            product_query,
            query,
            command,
        }
    }
}

#[async_trait]
impl OrderDetailServiceTrait for OrderDetailService {
    async fn create(
        &self,
        req: &CreateOrderDetailRequest,
    ) -> Result<ApiResponse<OrderDetail>, ServiceError> {
        // Two separate probes with distinct 400 messages.
        let order_ok = match req.id_pedido {
            Some(id_pedido) => self
                .order_query
                .exists(id_pedido)
                .await
                .map_err(|e| ServiceError::database("Error al agregar detalle del pedido", e))?,
            None => false,
        };

        if !order_ok {
            error!("❌ Order {:?} not found for new detail", req.id_pedido);
            return Err(ServiceError::ReferenceNotFound(
                "Pedido no encontrado".to_string(),
            ));
        }

        let product_ok = match req.id_prod {
            Some(id_prod) => self
                .product_query
                .exists(id_prod)
                .await
                .map_err(|e| ServiceError::database("Error al agregar detalle del pedido", e))?,
            None => false,
        };

        if !product_ok {
            error!("❌ Product {:?} not found for new detail", req.id_prod);
            return Err(ServiceError::ReferenceNotFound(
                "Producto no encontrado".to_string(),
            ));
        }

        let detail = self
            .command
            .create(req)
            .await
            .map_err(|e| ServiceError::database("Error al agregar detalle del pedido", e))?;

        Ok(ApiResponse {
            message: "Detalle del pedido agregado correctamente".to_string(),
            data: detail,
        })
    }

    async fn find_by_order(
        &self,
        id_pedido: i32,
    ) -> Result<ListResponse<OrderLineSummary>, ServiceError> {
        let details = self
            .query
            .find_by_order(id_pedido)
            .await
            .map_err(|e| ServiceError::database("Error al obtener detalles del pedido", e))?;

        Ok(ListResponse::new(details))
    }

    async fn update(
        &self,
        id_detalle: i32,
        req: &UpdateOrderDetailRequest,
    ) -> Result<ApiResponse<OrderDetail>, ServiceError> {
        let exists = self
            .query
            .exists(id_detalle)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar detalle del pedido", e))?;

        if !exists {
            return Err(ServiceError::NotFound(
                "Detalle de pedido no encontrado".to_string(),
            ));
        }

        let updated = self
            .command
            .update(id_detalle, req)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar detalle del pedido", e))?
            .ok_or_else(|| {
                ServiceError::NotFound("Detalle de pedido no encontrado".to_string())
            })?;

        Ok(ApiResponse {
            message: "Detalle del pedido actualizado".to_string(),
            data: updated,
        })
    }

    async fn delete(&self, id_detalle: i32) -> Result<ApiResponse<OrderDetail>, ServiceError> {
        let exists = self
            .query
            .exists(id_detalle)
            .await
            .map_err(|e| ServiceError::database("Error al eliminar detalle del pedido", e))?;

        if !exists {
            return Err(ServiceError::NotFound(
                "Detalle de pedido no encontrado".to_string(),
            ));
        }

        let deleted = self
            .command
            .delete(id_detalle)
            .await
            .map_err(|e| ServiceError::database("Error al eliminar detalle del pedido", e))?
            .ok_or_else(|| {
                ServiceError::NotFound("Detalle de pedido no encontrado".to_string())
            })?;

        Ok(ApiResponse {
            message: "Detalle del pedido eliminado".to_string(),
            data: deleted,
        })
    }
}
