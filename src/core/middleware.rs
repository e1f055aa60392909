//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// 请求日志中间件
///
/// 每个请求分配一个 request_id，请求结束后记录方法、路径、状态码和耗时。
/// 5xx 以 warn 级别输出。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(%request_id, %method, %uri, status = status.as_u16(), elapsed_ms, "request completed");
    } else {
        info!(%request_id, %method, %uri, status = status.as_u16(), elapsed_ms, "request completed");
    }

    response
}
