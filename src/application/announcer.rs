//! Announcer - 朗读调度
//!
//! 朗读主播回复的唯一入口，统一执行 cancel-before-speak:
//! 任一时刻至多一条语音在播，新请求抢占旧请求，不排队。
//!
//! 合成失败非致命：记录日志后继续，会话保持可交互

use std::sync::Arc;

use crate::application::ports::SpeechSynthesizerPort;
use crate::application::registry::VoiceRegistry;

/// 朗读调度器
pub struct Announcer {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    registry: Arc<VoiceRegistry>,
}

impl Announcer {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>, registry: Arc<VoiceRegistry>) -> Self {
        Self {
            synthesizer,
            registry,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 朗读文本（fire-and-forget）
    ///
    /// 选中音色不在当前快照时传 None，由引擎使用平台默认音色
    pub async fn say(&self, text: &str) {
        let voice = self.registry.selected_voice().await;

        if let Err(e) = self.synthesizer.cancel().await {
            tracing::warn!(error = %e, "Failed to cancel in-flight utterance");
        }

        if let Err(e) = self.synthesizer.speak(text, voice.as_ref()).await {
            tracing::warn!(error = %e, "Speech synthesis failed");
        } else {
            tracing::debug!(
                chars = text.len(),
                voice = voice.as_ref().map(|v| v.name().as_str()).unwrap_or("<platform default>"),
                "Utterance started"
            );
        }
    }
}
