use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(example = 1)]
    pub id_pedido: Option<i32>,

    pub fecha: Option<NaiveDate>,

    #[schema(example = 42.5)]
    pub total: Option<f64>,

    #[schema(example = 1)]
    pub id_rest: Option<i32>,
}

/// One line of an order-update payload. `id_detalle` is never sent here; the
/// database generates it on reinsert.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLineInput {
    pub id_prod: Option<i32>,
    pub cantidad: Option<i32>,
    pub subtotal: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderRequest {
    pub fecha: Option<NaiveDate>,
    pub total: Option<f64>,

    /// Full replacement set for the order's line items.
    #[serde(default)]
    pub detalles: Vec<OrderLineInput>,
}
