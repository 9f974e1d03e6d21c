use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal { message: String, error: String },
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingFields(msg) | ServiceError::ReferenceNotFound(msg) => {
                HttpError::BadRequest(msg)
            }

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Database { context, source } => HttpError::Internal {
                message: context,
                error: source.to_string(),
            },

            ServiceError::Repo(RepositoryError::NotFound) => {
                HttpError::NotFound("No encontrado".to_string())
            }

            ServiceError::Repo(repo_err) => HttpError::Internal {
                message: "Error interno del servidor".to_string(),
                error: repo_err.to_string(),
            },

            ServiceError::Custom(msg) => HttpError::Internal {
                message: "Error interno del servidor".to_string(),
                error: msg,
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, error) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            HttpError::Internal { message, error } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, Some(error))
            }
        };

        let body = Json(ErrorResponse { message, error });

        (status, body).into_response()
    }
}
