use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body: `{message}` for 400/404, `{message, error}` for 500.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
