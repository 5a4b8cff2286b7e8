//! API response types.

use auction_core::{AuctionError, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates an error response.
    pub fn error(error: ErrorResponse) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub AuctionError);

impl From<AuctionError> for AppError {
    fn from(err: AuctionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::<()>::error(error_response));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::success(data)))
}

/// Helper to create a no content (204) response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Turns a missing lookup result into a 404.
pub fn found<T>(value: Option<T>, resource_type: &'static str, id: impl ToString) -> Result<T, AppError> {
    value.ok_or_else(|| AppError(AuctionError::not_found(resource_type, id)))
}

/// Turns a `false` write result into a 404.
pub fn existed(done: bool, resource_type: &'static str, id: impl ToString) -> Result<(), AppError> {
    if done {
        Ok(())
    } else {
        Err(AppError(AuctionError::not_found(resource_type, id)))
    }
}

/// Turns a `false` insert result into a 500.
pub fn stored(done: bool, resource_type: &'static str) -> Result<(), AppError> {
    if done {
        Ok(())
    } else {
        Err(AppError(AuctionError::internal(format!(
            "{} was not stored",
            resource_type
        ))))
    }
}
