//! Conversation HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetConversation, SendMessage};
use crate::infrastructure::http::dto::{
    ApiResponse, ConversationResponse, ExchangeResponse, SendMessageRequest, TurnResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取完整对话日志
pub async fn get_conversation(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<ConversationResponse>> {
    let turns = state.get_conversation_handler.handle(GetConversation).await;

    let responses: Vec<TurnResponse> = turns.iter().map(TurnResponse::from).collect();

    Json(ApiResponse::success(ConversationResponse {
        total: responses.len(),
        turns: responses,
    }))
}

/// 发送听众消息
///
/// 空消息不产生任何回合；远端失败时主播回合为固定回退语
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<ExchangeResponse>>, ApiError> {
    let result = state
        .send_message_handler
        .handle(SendMessage { text: req.text })
        .await?;

    Ok(Json(ApiResponse::success(ExchangeResponse {
        user_turn: TurnResponse::from(&result.user_turn),
        host_turn: TurnResponse::from(&result.host_turn),
        fallback: result.fallback,
    })))
}
