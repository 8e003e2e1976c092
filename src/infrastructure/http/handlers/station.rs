//! Station HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetStation, StationState};
use crate::infrastructure::http::dto::{ApiResponse, StationResponse};
use crate::infrastructure::http::state::AppState;

/// 获取电台状态与品牌信息
pub async fn get_station(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<StationResponse>> {
    let view = state.get_station_handler.handle(GetStation).await;

    let station_state = match view.state {
        StationState::Loading => "loading",
        StationState::Ready => "ready",
    };

    Json(ApiResponse::success(StationResponse {
        state: station_state.to_string(),
        name: view.name,
        tagline: view.tagline,
        stream_url: view.stream_url,
    }))
}
