use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::error;

/// Accepts `application/json` and URL-encoded form bodies. A body the
/// extractor cannot parse surfaces as the global plain-text 500, never as a
/// structured handler response.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    error!("❌ Failed to parse form body: {}", rejection.body_text());
                    internal_plain()
                })?;

            return Ok(Self(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                error!("❌ Failed to parse JSON body: {}", rejection.body_text());
                internal_plain()
            })?;

        Ok(Self(value))
    }
}

fn internal_plain() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Algo salió mal!").into_response()
}
