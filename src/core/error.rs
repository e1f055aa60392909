//! 核心错误处理模块
//!
//! 把请求解析失败和存储失败映射为 HTTP 状态码与 `{"error": "..."}` 响应体。

use axum::{
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::app::product::service::StoreError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    /// 路径中的产品 ID 不是合法整数
    pub fn invalid_product_id() -> Self {
        Self::BadRequest("Invalid Product Id".to_string())
    }

    /// 请求体无法解码为产品
    pub fn invalid_payload() -> Self {
        Self::BadRequest("Invalid request payload".to_string())
    }

    pub fn product_not_found() -> Self {
        Self::NotFound("Product not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 存储错误原样暴露给调用方
impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::InternalServerError(err.to_string())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejecting product id: {}", rejection.body_text());
        CoreError::invalid_product_id()
    }
}

impl From<BytesRejection> for CoreError {
    fn from(rejection: BytesRejection) -> Self {
        tracing::debug!("rejecting request body: {}", rejection.body_text());
        CoreError::invalid_payload()
    }
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
