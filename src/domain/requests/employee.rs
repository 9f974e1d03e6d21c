use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    #[schema(example = 1)]
    pub id_empleado: Option<i32>,

    #[schema(example = "Ana García")]
    pub nombre: Option<String>,

    #[schema(example = "Camarero")]
    pub rol: Option<String>,

    #[schema(example = 1)]
    pub id_rest: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub nombre: Option<String>,
    pub rol: Option<String>,
    pub id_rest: Option<i32>,
}
