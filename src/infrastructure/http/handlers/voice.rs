//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ListVoices, SelectVoice};
use crate::infrastructure::http::dto::{
    ApiResponse, SelectVoiceRequest, SelectedVoiceResponse, VoiceCatalogResponse, VoiceResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取音色目录快照与选中音色
///
/// 空目录是合法状态（前端渲染"无可用音色"）
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<VoiceCatalogResponse>> {
    let catalog = state.list_voices_handler.handle(ListVoices).await;

    let voices: Vec<VoiceResponse> = catalog
        .voices
        .into_iter()
        .map(|v| VoiceResponse {
            name: v.name,
            language: v.language,
        })
        .collect();

    Json(ApiResponse::success(VoiceCatalogResponse {
        voices,
        selected: catalog.selected,
    }))
}

/// 选中音色（校验目录成员并持久化）
pub async fn select_voice(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectVoiceRequest>,
) -> Result<Json<ApiResponse<SelectedVoiceResponse>>, ApiError> {
    let result = state
        .select_voice_handler
        .handle(SelectVoice { name: req.name })
        .await?;

    tracing::info!(voice = %result.name, "Voice selection changed");

    Ok(Json(ApiResponse::success(SelectedVoiceResponse {
        name: result.name,
        language: result.language,
    })))
}
