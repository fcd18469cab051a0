use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::error;

/// 记录失败请求的方法、路径和状态码
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        error!("Request failed - {} {}, Status: {}", method, path, status);
    }

    response
}
