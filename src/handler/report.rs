use crate::{
    abstract_trait::DynReportService,
    domain::{
        requests::TopSellingParams,
        responses::{DataResponse, ListResponse},
    },
    errors::HttpError,
    model::{Order, OrderProductRow, RestaurantSalesRow, RoleCountRow, TopProductRow},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::error;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/pedido-productos/{id_pedido}",
    tag = "Reporte",
    params(("id_pedido" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Products and quantities for one order", body = DataResponse<OrderProductRow>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_order_products(
    Extension(service): Extension<DynReportService>,
    Path(id_pedido): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.products_per_order(id_pedido).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/productos-mas-vendidos",
    tag = "Reporte",
    params(TopSellingParams),
    responses(
        (status = 200, description = "Products selling strictly more than the threshold", body = ListResponse<TopProductRow>),
        (status = 400, description = "Missing unidades parameter"),
        (status = 404, description = "No product above the threshold"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_top_selling_products(
    Extension(service): Extension<DynReportService>,
    Query(params): Query<TopSellingParams>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.top_selling(params.unidades).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/ventas-por-restaurante",
    tag = "Reporte",
    responses(
        (status = 200, description = "Sales totals per restaurant, highest first", body = ListResponse<RestaurantSalesRow>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_sales_per_restaurant(
    Extension(service): Extension<DynReportService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.sales_per_restaurant().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/pedidos-por-fecha/{fecha}",
    tag = "Reporte",
    params(("fecha" = String, Path, description = "Date in YYYY-MM-DD format")),
    responses(
        (status = 200, description = "Orders placed on the given date", body = ListResponse<Order>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_orders_by_date(
    Extension(service): Extension<DynReportService>,
    Path(fecha): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let fecha = fecha.parse::<NaiveDate>().map_err(|e| {
        error!("❌ Invalid date segment {fecha:?}: {e}");
        HttpError::Internal {
            message: "Error al obtener pedidos por fecha".to_string(),
            error: e.to_string(),
        }
    })?;

    let response = service.orders_by_date(fecha).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/empleados-por-rol/{id_rest}",
    tag = "Reporte",
    params(("id_rest" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Employee counts grouped by role", body = DataResponse<RoleCountRow>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_employees_by_role(
    Extension(service): Extension<DynReportService>,
    Path(id_rest): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.employees_by_role(id_rest).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn report_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/pedido-productos/{id_pedido}", get(get_order_products))
        .route(
            "/api/productos-mas-vendidos",
            get(get_top_selling_products),
        )
        .route("/api/ventas-por-restaurante", get(get_sales_per_restaurant))
        .route("/api/pedidos-por-fecha/{fecha}", get(get_orders_by_date))
        .route("/api/empleados-por-rol/{id_rest}", get(get_employees_by_role))
        .layer(Extension(app_state.di_container.report_service.clone()))
}
