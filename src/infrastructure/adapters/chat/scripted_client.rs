//! Scripted Chat Client - 用于测试和离线运行的回复引擎
//!
//! 不调用远端服务，按顺序循环返回配置的固定回复

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{ChatEnginePort, ChatError, ChatRequest};

/// Scripted Chat Client 配置
#[derive(Debug, Clone)]
pub struct ScriptedChatClientConfig {
    /// 循环使用的固定回复
    pub replies: Vec<String>,
    /// 模拟的网络延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for ScriptedChatClientConfig {
    fn default() -> Self {
        Self {
            replies: vec![
                "Ahh, boa escolha! Isso é rock de verdade! \u{1F918}".to_string(),
                "Aumenta o volume! Essa é pra tocar alto!".to_string(),
            ],
            latency_ms: 200,
        }
    }
}

/// Scripted Chat Client
pub struct ScriptedChatClient {
    config: ScriptedChatClientConfig,
    next: AtomicUsize,
}

impl ScriptedChatClient {
    pub fn new(config: ScriptedChatClientConfig) -> Self {
        tracing::info!(
            replies = config.replies.len(),
            "ScriptedChatClient initialized (offline mode)"
        );
        Self {
            config,
            next: AtomicUsize::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScriptedChatClientConfig::default())
    }
}

#[async_trait]
impl ChatEnginePort for ScriptedChatClient {
    async fn generate(&self, request: ChatRequest) -> Result<String, ChatError> {
        tracing::debug!(
            text_len = request.user_text.len(),
            "ScriptedChatClient: returning canned reply"
        );

        // 模拟网络往返
        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.replies.is_empty() {
            return Err(ChatError::ServiceError("No scripted replies".to_string()));
        }

        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.config.replies.len();
        Ok(self.config.replies[index].clone())
    }
}
