use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug)]
pub enum AppError {
    MissingUrl,
    CrawlFailed,
}

#[derive(Serialize)]
struct ErrorResponse {
    code: i32,
    error_message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MissingUrl => (StatusCode::BAD_REQUEST, "缺少 url 参数".to_string()),
            AppError::CrawlFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "页面抓取失败".to_string())
            }
        };

        let body = Json(ErrorResponse {
            code: status.as_u16() as i32,
            error_message,
        });

        (status, body).into_response()
    }
}
