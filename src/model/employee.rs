use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id_empleado: i32,
    pub nombre: String,
    pub rol: String,
    pub id_rest: i32,
}
