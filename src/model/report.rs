use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderProductRow {
    pub producto: String,
    pub cantidad: i32,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TopProductRow {
    pub producto: String,
    pub unidades_vendidas: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RestaurantSalesRow {
    pub restaurante: String,
    pub total_ventas: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoleCountRow {
    pub rol: String,
    pub cantidad_empleados: i64,
}
