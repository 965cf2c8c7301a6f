//! HTTP Error Handling
//!
//! 客户端错误返回 `{"message": ...}`，服务端错误返回 `{"error": ...}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 4xx 响应体
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// 5xx 响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    NotImplemented(String),
    /// 模型服务不可达，按 500 返回
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) | ApiError::ServiceUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        }
    }

    /// 小说不存在（含路径中的非法 ID）
    pub fn novel_not_found() -> Self {
        ApiError::NotFound("Novel not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            ApiError::NotFound(message) => {
                tracing::warn!(status = status.as_u16(), error = %message, "Resource not found");
                (status, Json(MessageBody { message })).into_response()
            }
            ApiError::BadRequest(message) => {
                tracing::warn!(status = status.as_u16(), error = %message, "Bad request");
                (status, Json(MessageBody { message })).into_response()
            }
            ApiError::Internal(error) => {
                tracing::error!(status = status.as_u16(), error = %error, "Internal server error");
                (status, Json(ErrorBody { error })).into_response()
            }
            ApiError::NotImplemented(error) => {
                tracing::warn!(status = status.as_u16(), error = %error, "Not implemented");
                (status, Json(ErrorBody { error })).into_response()
            }
            ApiError::ServiceUnavailable(error) => {
                tracing::error!(
                    status = status.as_u16(),
                    error = %error,
                    "Model service unavailable"
                );
                (status, Json(ErrorBody { error })).into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, .. } => {
                ApiError::NotFound(format!("{} not found", resource_type))
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            e @ ApplicationError::UnsupportedFormat(_) => ApiError::BadRequest(e.to_string()),
            ApplicationError::ExternalServiceError(msg) => ApiError::ServiceUnavailable(msg),
            ApplicationError::ProtocolError(msg) => ApiError::Internal(msg),
            ApplicationError::StorageError(msg) => {
                ApiError::Internal(format!("Failed to export file: {}", msg))
            }
            ApplicationError::NotImplemented(msg) => ApiError::NotImplemented(msg),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}
