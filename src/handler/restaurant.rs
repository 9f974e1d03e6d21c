use crate::{
    abstract_trait::DynRestaurantService,
    domain::{
        requests::{CreateRestaurantRequest, UpdateRestaurantRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::HttpError,
    handler::json::JsonOrForm,
    model::Restaurant,
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
    path = "/api/restaurantes",
    tag = "Restaurante",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Restaurant created", body = ApiResponse<Restaurant>),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_restaurant(
    Extension(service): Extension<DynRestaurantService>,
    JsonOrForm(body): JsonOrForm<CreateRestaurantRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/restaurantes",
    tag = "Restaurante",
    responses(
        (status = 200, description = "List of restaurants ordered by name", body = ListResponse<Restaurant>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_restaurants(
    Extension(service): Extension<DynRestaurantService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/restaurantes/{id}",
    tag = "Restaurante",
    params(("id" = i32, Path, description = "Restaurant ID")),
    request_body = UpdateRestaurantRequest,
    responses(
        (status = 200, description = "Restaurant updated", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_restaurant(
    Extension(service): Extension<DynRestaurantService>,
    Path(id): Path<i32>,
    JsonOrForm(body): JsonOrForm<UpdateRestaurantRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/restaurantes/{id}",
    tag = "Restaurante",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant deleted", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_restaurant(
    Extension(service): Extension<DynRestaurantService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn restaurant_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/restaurantes", post(create_restaurant))
        .route("/api/restaurantes", get(get_restaurants))
        .route("/api/restaurantes/{id}", put(update_restaurant))
        .route("/api/restaurantes/{id}", delete(delete_restaurant))
        .layer(Extension(app_state.di_container.restaurant_service.clone()))
}
