use crate::{
    abstract_trait::DynOrderDetailService,
    domain::{
        requests::{CreateOrderDetailRequest, UpdateOrderDetailRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::HttpError,
    handler::json::JsonOrForm,
    model::{OrderDetail, OrderLineSummary},
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
    path = "/api/detalles-pedido",
    tag = "DetallePedido",
    request_body = CreateOrderDetailRequest,
    responses(
        (status = 201, description = "Order line created", body = ApiResponse<OrderDetail>),
        (status = 400, description = "Referenced order or product does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order_detail(
    Extension(service): Extension<DynOrderDetailService>,
    JsonOrForm(body): JsonOrForm<CreateOrderDetailRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/detalles-pedido/{id}",
    tag = "DetallePedido",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Line items for one order", body = ListResponse<OrderLineSummary>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order_details(
    Extension(service): Extension<DynOrderDetailService>,
    Path(id_pedido): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_order(id_pedido).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/detalles-pedido/{id}",
    tag = "DetallePedido",
    params(("id" = i32, Path, description = "Order line ID")),
    request_body = UpdateOrderDetailRequest,
    responses(
        (status = 200, description = "Order line updated", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order line not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_order_detail(
    Extension(service): Extension<DynOrderDetailService>,
    Path(id): Path<i32>,
    JsonOrForm(body): JsonOrForm<UpdateOrderDetailRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/detalles-pedido/{id}",
    tag = "DetallePedido",
    params(("id" = i32, Path, description = "Order line ID")),
    responses(
        (status = 200, description = "Order line deleted", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order line not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_order_detail(
    Extension(service): Extension<DynOrderDetailService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_detail_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/detalles-pedido", post(create_order_detail))
        .route("/api/detalles-pedido/{id}", get(get_order_details))
        .route("/api/detalles-pedido/{id}", put(update_order_detail))
        .route("/api/detalles-pedido/{id}", delete(delete_order_detail))
        .layer(Extension(
            app_state.di_container.order_detail_service.clone(),
        ))
}
