use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use tracing::info;

use crate::{AppState, error::AppError};

use super::model::CrawlParams;

#[axum::debug_handler]
pub async fn crawl(
    State(state): State<AppState>,
    Query(params): Query<CrawlParams>,
) -> Result<impl IntoResponse, AppError> {
    let url = match params.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => return Err(AppError::MissingUrl),
    };
    let paying_customer = params.is_paying_customer();

    info!("Crawling {} (paying_customer: {})", url, paying_customer);

    let content = state
        .crawler
        .resolve(&url, paying_customer)
        .await
        .map_err(|_| AppError::CrawlFailed)?;

    Ok(([(header::CONTENT_TYPE, "text/html")], content))
}
