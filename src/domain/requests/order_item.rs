use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDetailRequest {
    /// Optional; the database generates the key when absent.
    pub id_detalle: Option<i32>,

    #[schema(example = 2)]
    pub cantidad: Option<i32>,

    #[schema(example = 19.0)]
    pub subtotal: Option<f64>,

    #[schema(example = 1)]
    pub id_pedido: Option<i32>,

    #[schema(example = 1)]
    pub id_prod: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderDetailRequest {
    pub cantidad: Option<i32>,
    pub subtotal: Option<f64>,
}
