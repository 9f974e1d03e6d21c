use crate::model::{Order, OrderDetailProduct};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for single-row mutations: `{message, data}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

/// Envelope for list reads: `{count, data}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Bare `{data}` envelope used by a couple of report endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

/// Keyed order read: the order row plus its enriched line items.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderWithDetailsResponse {
    pub pedido: Order,
    pub detalles: Vec<OrderDetailProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DbHealthResponse {
    pub status: String,
    pub time: String,
}
