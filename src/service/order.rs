use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynRestaurantQueryRepository,
        OrderServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, ListResponse, OrderWithDetailsResponse},
    },
    errors::ServiceError,
    model::Order,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderService {
    restaurant_query: DynRestaurantQueryRepository,
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
}

pub struct OrderServiceDeps {
    pub restaurant_query: DynRestaurantQueryRepository,
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            restaurant_query,
            query,
            command,
        } = deps;

        Self {
            restaurant_query,
            query,
            command,
        }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn create(&self, req: &CreateOrderRequest) -> Result<ApiResponse<Order>, ServiceError> {
        // An absent id_rest probes like a nonexistent one: both are 400.
        let restaurant_ok = match req.id_rest {
            Some(id_rest) => self
                .restaurant_query
                .exists(id_rest)
                .await
                .map_err(|e| ServiceError::database("Error al crear el pedido", e))?,
            None => false,
        };

        if !restaurant_ok {
            error!("❌ Restaurant {:?} not found for new order", req.id_rest);
            return Err(ServiceError::ReferenceNotFound(
                "Restaurante no encontrado".to_string(),
            ));
        }

        let order = self
            .command
            .create(req)
            .await
            .map_err(|e| ServiceError::database("Error al crear el pedido", e))?;

        Ok(ApiResponse {
            message: "Pedido creado correctamente".to_string(),
            data: order,
        })
    }

    async fn find_all(&self) -> Result<ListResponse<Order>, ServiceError> {
        let orders = self
            .query
            .find_all()
            .await
            .map_err(|e| ServiceError::database("Error al obtener pedidos", e))?;

        Ok(ListResponse::new(orders))
    }

    async fn find_by_id(&self, id: i32) -> Result<OrderWithDetailsResponse, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| ServiceError::database("Error al obtener pedido", e))?
            .ok_or_else(|| ServiceError::NotFound("Pedido no encontrado".to_string()))?;

        let details = self
            .query
            .find_details(id)
            .await
            .map_err(|e| ServiceError::database("Error al obtener pedido", e))?;

        Ok(OrderWithDetailsResponse {
            pedido: order,
            detalles: details,
        })
    }

    async fn update(
        &self,
        id: i32,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<Order>, ServiceError> {
        let exists = self
            .query
            .exists(id)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar pedido", e))?;

        if !exists {
            return Err(ServiceError::NotFound("Pedido no encontrado".to_string()));
        }

        let updated = self
            .command
            .update_with_details(id, req)
            .await
            .map_err(|e| ServiceError::database("Error al actualizar pedido", e))?
            .ok_or_else(|| ServiceError::NotFound("Pedido no encontrado".to_string()))?;

        info!(
            "✅ Order ID {id} updated with {} line items",
            req.detalles.len()
        );

        Ok(ApiResponse {
            message: "Pedido actualizado correctamente".to_string(),
            data: updated,
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<Order>, ServiceError> {
        let deleted = self
            .command
            .delete_cascade(id)
            .await
            .map_err(|e| ServiceError::database("Error al eliminar pedido", e))?;

        let Some(order) = deleted else {
            error!("❌ Order ID {id} not found for deletion");
            return Err(ServiceError::NotFound("Pedido no encontrado".to_string()));
        };

        Ok(ApiResponse {
            message: "Pedido eliminado correctamente".to_string(),
            data: order,
        })
    }
}
