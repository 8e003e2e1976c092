//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::conversation::Turn;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Station DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub state: String,
    pub name: String,
    pub tagline: String,
    pub stream_url: String,
}

// ============================================================================
// Conversation DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TurnResponse {
    pub id: String,
    pub role: String,
    pub content: String,
    pub created_at: String,
}

impl From<&Turn> for TurnResponse {
    fn from(turn: &Turn) -> Self {
        Self {
            id: turn.id().to_string(),
            role: turn.role().as_str().to_string(),
            content: turn.content().as_str().to_string(),
            created_at: turn.created_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub total: usize,
    pub turns: Vec<TurnResponse>,
}

#[derive(Debug, Serialize)]
pub struct ExchangeResponse {
    pub user_turn: TurnResponse,
    pub host_turn: TurnResponse,
    pub fallback: bool,
}

// ============================================================================
// Voice DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoiceResponse {
    pub name: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct VoiceCatalogResponse {
    pub voices: Vec<VoiceResponse>,
    pub selected: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectVoiceRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SelectedVoiceResponse {
    pub name: String,
    pub language: String,
}
