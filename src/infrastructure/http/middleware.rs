//! HTTP Middleware
//!
//! 访问日志中间件

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 访问日志中间件
///
/// 5xx 记为 error，4xx 记为 warn，其余为 debug
pub async fn access_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, %uri, status, elapsed_ms, "HTTP server error");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %uri, status, elapsed_ms, "HTTP client error");
    } else {
        tracing::debug!(%method, %uri, status, elapsed_ms, "HTTP request completed");
    }

    response
}
