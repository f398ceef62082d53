//! 模拟后端错误

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// 以 `{"detail": ...}` 响应体返回的错误
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    /// 字段校验失败：`(field, message)`
    #[error("{field}: {message}")]
    Validation { field: String, message: String },
}

impl BackendError {
    pub fn status(&self) -> StatusCode {
        match self {
            BackendError::BadRequest(_) => StatusCode::BAD_REQUEST,
            BackendError::NotFound(_) => StatusCode::NOT_FOUND,
            BackendError::Conflict(_) => StatusCode::CONFLICT,
            BackendError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            BackendError::Validation { field, message } => json!({
                "detail": [{
                    "loc": ["body", field],
                    "msg": message,
                    "type": "value_error",
                }]
            }),
            other => json!({ "detail": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
