//! Speech Synthesizer Port - 语音合成引擎抽象
//!
//! 定义平台语音合成的抽象接口，具体实现在 infrastructure/adapters/speech 层
//!
//! 约定:
//! - `voices` 返回平台目录快照，空目录是合法状态而非错误
//! - 平台目录变化通过 `subscribe_catalog_changed` 的广播信号通知，
//!   订阅方收到信号后自行重新查询
//! - `speak` 不排队：调用方先 `cancel` 再 `speak`，任一时刻至多一条在播

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::domain::voice::VoiceDescriptor;

/// 语音合成错误
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 查询平台音色目录（平台顺序，可能为空）
    async fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError>;

    /// 朗读文本
    ///
    /// `voice` 为 None 时使用平台默认音色
    async fn speak(&self, text: &str, voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError>;

    /// 取消当前在播的语音
    async fn cancel(&self) -> Result<(), SpeechError>;

    /// 订阅音色目录变化信号
    fn subscribe_catalog_changed(&self) -> broadcast::Receiver<()>;
}
