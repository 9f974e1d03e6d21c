mod employee;
mod health;
mod json;
mod order;
mod order_item;
mod product;
mod report;
mod restaurant;

use crate::state::AppState;
use anyhow::Result;
use axum::Json;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::utils::shutdown_signal;

pub use self::employee::employee_routes;
pub use self::health::health_routes;
pub use self::json::JsonOrForm;
pub use self::order::order_routes;
pub use self::order_item::order_detail_routes;
pub use self::product::product_routes;
pub use self::report::report_routes;
pub use self::restaurant::restaurant_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant::create_restaurant,
        restaurant::get_restaurants,
        restaurant::update_restaurant,
        restaurant::delete_restaurant,

        product::create_product,
        product::get_products,
        product::update_product,
        product::delete_product,

        order::create_order,
        order::get_orders,
        order::get_order,
        order::update_order,
        order::delete_order,

        order_item::create_order_detail,
        order_item::get_order_details,
        order_item::update_order_detail,
        order_item::delete_order_detail,

        employee::create_employee,
        employee::get_employees,
        employee::update_employee,
        employee::delete_employee,

        report::get_order_products,
        report::get_top_selling_products,
        report::get_sales_per_restaurant,
        report::get_orders_by_date,
        report::get_employees_by_role,

        health::test_db,
    ),
    tags(
        (name = "Restaurante", description = "Restaurant endpoints"),
        (name = "Producto", description = "Product endpoints"),
        (name = "Pedido", description = "Order endpoints"),
        (name = "DetallePedido", description = "Order line endpoints"),
        (name = "Empleado", description = "Employee endpoints"),
        (name = "Reporte", description = "Reporting endpoints"),
        (name = "Health", description = "Connectivity probe"),
    )
)]
struct ApiDoc;

async fn fallback_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Ruta no encontrada" })),
    )
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(shared_state: Arc<AppState>) -> axum::Router {
        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(restaurant_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(order_detail_routes(shared_state.clone()))
            .merge(employee_routes(shared_state.clone()))
            .merge(report_routes(shared_state.clone()))
            .merge(health_routes(shared_state));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
            .fallback(fallback_handler)
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);
        let app = Self::build(shared_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
