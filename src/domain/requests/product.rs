use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = 1)]
    pub id_prod: Option<i32>,

    #[schema(example = "Pizza Margherita")]
    pub nombre: Option<String>,

    #[schema(example = 9.5)]
    pub precio: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub nombre: Option<String>,
    pub precio: Option<f64>,
}
