use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use crate::{AppState, middleware::log_errors, routes};

// 页面抓取路由
pub fn crawl_routes() -> Router<AppState> {
    Router::new().route("/crawl", get(routes::crawl::crawl))
}

// 线程预算配置路由
pub fn settings_routes() -> Router<AppState> {
    Router::new()
        .route("/set", post(routes::settings::set_values))
        .route("/get", get(routes::settings::get_values))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    // 前端直接跨域调用，放开来源限制
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .merge(crawl_routes())
        .merge(settings_routes())
        .layer(axum::middleware::from_fn(log_errors))
        .layer(cors)
        .with_state(state)
}
