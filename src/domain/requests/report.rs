use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct TopSellingParams {
    /// Minimum units threshold (strictly greater than). Required.
    #[param(example = 10)]
    pub unidades: Option<i64>,
}
