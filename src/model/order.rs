use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub id_pedido: i32,
    pub fecha: NaiveDate,
    pub total: f64,
    pub id_rest: i32,
}
