use crate::{
    abstract_trait::DynHealthService, domain::responses::DbHealthResponse, state::AppState,
};
use axum::{
    Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get,
};
use serde_json::json;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/test-db",
    tag = "Health",
    responses(
        (status = 200, description = "Database reachable", body = DbHealthResponse),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn test_db(Extension(service): Extension<DynHealthService>) -> impl IntoResponse {
    match service.check().await {
        Ok(response) => (StatusCode::OK, Json(json!(response))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": "Error de conexión a la base de datos"
            })),
        ),
    }
}

pub fn health_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/test-db", get(test_db))
        .layer(Extension(app_state.di_container.health_service.clone()))
}
