use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Restaurant {
    pub id_rest: i32,
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
    pub fecha_apertura: Option<NaiveDate>,
}
