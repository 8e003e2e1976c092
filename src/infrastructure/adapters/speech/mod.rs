//! Speech Adapter - 语音合成引擎实现
//!
//! - MutedSynthesizer: 默认构建，只记录日志不出声
//! - SystemSynthesizer: `speech` feature，走平台语音服务

mod muted_synthesizer;
#[cfg(feature = "speech")]
mod system_synthesizer;

pub use muted_synthesizer::MutedSynthesizer;
#[cfg(feature = "speech")]
pub use system_synthesizer::SystemSynthesizer;
