use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderDetail {
    pub id_detalle: i32,
    pub cantidad: i32,
    pub subtotal: f64,
    pub id_pedido: i32,
    pub id_prod: i32,
}

/// Line item joined to its product name, as returned by the order detail view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderDetailProduct {
    pub id_detalle: i32,
    pub cantidad: i32,
    pub subtotal: f64,
    pub id_pedido: i32,
    pub id_prod: i32,
    pub producto_nombre: String,
}

/// Product name + quantity + subtotal for the list-by-order endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderLineSummary {
    pub nombre: String,
    pub cantidad: i32,
    pub subtotal: f64,
}
