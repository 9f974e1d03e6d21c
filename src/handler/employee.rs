use crate::{
    abstract_trait::DynEmployeeService,
    domain::{
        requests::{CreateEmployeeRequest, UpdateEmployeeRequest},
        responses::{ApiResponse, ListResponse},
    },
    errors::HttpError,
    handler::json::JsonOrForm,
    model::Employee,
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
    path = "/api/empleados",
    tag = "Empleado",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = ApiResponse<Employee>),
        (status = 400, description = "Referenced restaurant does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_employee(
    Extension(service): Extension<DynEmployeeService>,
    JsonOrForm(body): JsonOrForm<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/empleados",
    tag = "Empleado",
    responses(
        (status = 200, description = "List of employees ordered by name", body = ListResponse<Employee>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_employees(
    Extension(service): Extension<DynEmployeeService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/empleados/{id}",
    tag = "Empleado",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = ApiResponse<Employee>),
        (status = 400, description = "Referenced restaurant does not exist"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_employee(
    Extension(service): Extension<DynEmployeeService>,
    Path(id): Path<i32>,
    JsonOrForm(body): JsonOrForm<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/empleados/{id}",
    tag = "Empleado",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = ApiResponse<Employee>),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_employee(
    Extension(service): Extension<DynEmployeeService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn employee_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/empleados", post(create_employee))
        .route("/api/empleados", get(get_employees))
        .route("/api/empleados/{id}", put(update_employee))
        .route("/api/empleados/{id}", delete(delete_employee))
        .layer(Extension(app_state.di_container.employee_service.clone()))
}
