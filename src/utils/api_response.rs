use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResponse {
    pub ok: bool,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Wrapper to combine StatusCode and the Body
pub struct ApiResponseResult<T>(pub StatusCode, pub T);

impl<T> IntoResponse for ApiResponseResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn success(image_url: String) -> ApiResponseResult<ApplyResponse> {
        ApiResponseResult(
            StatusCode::OK,
            ApplyResponse { ok: true, image_url },
        )
    }

    pub fn error(status_code: StatusCode, message: &str) -> ApiResponseResult<ErrorResponse> {
        ApiResponseResult(
            status_code,
            ErrorResponse { error: message.to_string() },
        )
    }

    pub fn not_found() -> Response {
        (StatusCode::NOT_FOUND, "Not Found").into_response()
    }
}
