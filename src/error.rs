use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use crate::utils::api_response::ResponseBuilder;

/// Every way an application submission can fail.
///
/// The `Display` text is what the client sees in the `error` field, so the
/// validation variants carry the exact wording of the public contract.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid plan")]
    InvalidPlan,

    #[error("Invalid payment")]
    InvalidPayment,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("adImage must be a file")]
    ImageNotFile,

    #[error("File must be an image")]
    NotAnImage,

    #[error("Image size too large (max 10MB)")]
    ImageTooLarge,

    #[error("Failed to send Slack notification")]
    NotificationFailed,

    /// Parse, storage and transport failures. The message is passed through verbatim.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields
            | AppError::InvalidPlan
            | AppError::InvalidPayment
            | AppError::InvalidEmail
            | AppError::ImageNotFile => StatusCode::BAD_REQUEST,
            AppError::NotAnImage => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::ImageTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotificationFailed => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Internal(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::Internal(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Application rejected ({}): {}", status, self);
        } else {
            tracing::warn!("Application rejected ({}): {}", status, self);
        }

        ResponseBuilder::error(status, &self.to_string()).into_response()
    }
}
