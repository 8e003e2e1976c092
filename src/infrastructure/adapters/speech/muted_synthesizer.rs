//! Muted Synthesizer - 无声语音引擎
//!
//! 默认构建使用：目录为空，朗读只打日志。用于无声音设备的部署
//! 和未启用 `speech` feature 的无头环境

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::application::ports::{SpeechError, SpeechSynthesizerPort};
use crate::domain::voice::VoiceDescriptor;

/// 无声语音引擎
pub struct MutedSynthesizer {
    // 只为满足订阅接口；无声引擎的目录从不变化
    changed_tx: broadcast::Sender<()>,
}

impl MutedSynthesizer {
    pub fn new() -> Self {
        let (changed_tx, _) = broadcast::channel(1);
        tracing::info!("MutedSynthesizer initialized (no audio output)");
        Self { changed_tx }
    }
}

impl Default for MutedSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for MutedSynthesizer {
    async fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
        Ok(Vec::new())
    }

    async fn speak(&self, text: &str, voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError> {
        tracing::info!(
            voice = voice.map(|v| v.name().as_str()).unwrap_or("<platform default>"),
            "[muted] {}",
            text
        );
        Ok(())
    }

    async fn cancel(&self) -> Result<(), SpeechError> {
        Ok(())
    }

    fn subscribe_catalog_changed(&self) -> broadcast::Receiver<()> {
        self.changed_tx.subscribe()
    }
}
