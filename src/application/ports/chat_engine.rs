//! Chat Engine Port - 生成式回复引擎抽象
//!
//! 定义主播回复生成的抽象接口，具体实现在 infrastructure/adapters/chat 层
//!
//! 外部 API（生成式语言服务）:
//! POST <endpoint>
//! Request: {"contents": [{"parts": [{"text": <preamble + user text>}]}]}
//! Response: {"candidates": [{"content": {"parts": [{"text": <reply>}]}}]}

use async_trait::async_trait;
use thiserror::Error;

/// Chat Engine 错误
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 回复生成请求
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// 听众的原始消息文本
    pub user_text: String,
}

/// Chat Engine Port
#[async_trait]
pub trait ChatEnginePort: Send + Sync {
    /// 生成一条主播回复
    ///
    /// 单次请求，无重试无流式；取首个候选的首个片段文本
    async fn generate(&self, request: ChatRequest) -> Result<String, ChatError>;
}
