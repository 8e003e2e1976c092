//! Gemini Chat Client - 调用生成式语言 HTTP 服务
//!
//! 实现 ChatEnginePort trait，通过 HTTP 调用远端生成式语言服务
//!
//! 外部 API:
//! POST <endpoint>
//! Header: Authorization: Bearer <api key>
//! Request: {"contents": [{"parts": [{"text": "..."}]}]}  (JSON)
//! Response: {"candidates": [{"content": {"parts": [{"text": "..."}]}}]}
//!
//! 单次请求：无重试，默认无超时（timeout_secs = 0 表示不限）

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{ChatEnginePort, ChatError, ChatRequest};

/// 固定人设前导语：确立主播角色与回复语言，拼接在每条用户消息之前
const PERSONA_PREAMBLE: &str = "You are BAI VOZ, a female AI radio host specialized in rock \
music. Respond in Portuguese, focusing on rock music, especially classic rock, hard rock, \
and heavy metal. Current user message: ";

// ============================================================================
// Wire DTOs
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ============================================================================
// Client
// ============================================================================

/// Gemini 客户端配置
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// 生成接口完整 URL
    pub endpoint: String,
    /// Bearer 密钥（来自环境）
    pub api_key: String,
    /// 请求超时（秒），0 表示不限
    pub timeout_secs: u64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent".to_string(),
            api_key: String::new(),
            timeout_secs: 0,
        }
    }
}

/// Gemini Chat 客户端
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(config: GeminiClientConfig) -> Result<Self, ChatError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 构造带人设前导语的请求体
    fn build_request(user_text: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{}{}", PERSONA_PREAMBLE, user_text),
                }],
            }],
        }
    }

    /// 取首个候选的首个片段文本
    fn extract_reply(response: GenerateResponse) -> Result<String, ChatError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ChatError::InvalidResponse("No candidates in response".to_string()))
    }
}

#[async_trait]
impl ChatEnginePort for GeminiClient {
    async fn generate(&self, request: ChatRequest) -> Result<String, ChatError> {
        let body = Self::build_request(&request.user_text);

        tracing::debug!(
            endpoint = %self.config.endpoint,
            text_len = request.user_text.len(),
            "Sending generate request"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout
                } else if e.is_connect() {
                    ChatError::NetworkError(format!("Cannot connect to chat service: {}", e))
                } else {
                    ChatError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

        let reply = Self::extract_reply(parsed)?;

        tracing::info!(reply_len = reply.len(), "Generate request completed");

        Ok(reply)
    }
}
