mod api;

pub use self::api::{
    ApiResponse, DataResponse, DbHealthResponse, ListResponse, OrderWithDetailsResponse,
};
