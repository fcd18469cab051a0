use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::AppState;

use super::model::{ThreadSettingsResponse, UpdateSettingsParams};

#[axum::debug_handler]
pub async fn set_values(
    State(state): State<AppState>,
    Query(params): Query<UpdateSettingsParams>,
) -> impl IntoResponse {
    state
        .crawler
        .configure(params.paying_value(), params.non_paying_value());

    let (paying, non_paying) = state.crawler.current_config();
    info!(
        "Thread budget updated - paying: {}, non-paying: {}",
        paying, non_paying
    );

    StatusCode::OK
}

#[axum::debug_handler]
pub async fn get_values(State(state): State<AppState>) -> impl IntoResponse {
    let (paying, non_paying) = state.crawler.current_config();

    (
        StatusCode::OK,
        Json(ThreadSettingsResponse { paying, non_paying }),
    )
}
