use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display fields are `Option` so the service can issue the combined
/// presence-check message instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRestaurantRequest {
    #[schema(example = 1)]
    pub id_rest: Option<i32>,

    #[schema(example = "La Trattoria")]
    pub nombre: Option<String>,

    #[schema(example = "Madrid")]
    pub ciudad: Option<String>,

    #[schema(example = "Calle Mayor 1")]
    pub direccion: Option<String>,

    pub fecha_apertura: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRestaurantRequest {
    pub nombre: Option<String>,
    pub ciudad: Option<String>,
    pub direccion: Option<String>,
    pub fecha_apertura: Option<NaiveDate>,
}
