use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, ListResponse, OrderWithDetailsResponse},
    },
    errors::HttpError,
    handler::json::JsonOrForm,
    model::Order,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/pedidos",
    tag = "Pedido",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "Referenced restaurant does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderService>,
    JsonOrForm(body): JsonOrForm<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/pedidos",
    tag = "Pedido",
    responses(
        (status = 200, description = "List of orders, newest first", body = ListResponse<Order>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/pedidos/{id}",
    tag = "Pedido",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with its line items", body = OrderWithDetailsResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/pedidos/{id}",
    tag = "Pedido",
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order and line items replaced", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
    JsonOrForm(body): JsonOrForm<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/pedidos/{id}",
    tag = "Pedido",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order and line items deleted", body = ApiResponse<Order>),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/pedidos", post(create_order))
        .route("/api/pedidos", get(get_orders))
        .route("/api/pedidos/{id}", get(get_order))
        .route("/api/pedidos/{id}", put(update_order))
        .route("/api/pedidos/{id}", delete(delete_order))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
