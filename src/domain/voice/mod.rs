//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 平台音色描述符建模（只读，由语音引擎目录提供）
//! - 首次运行的默认音色挑选

mod selection;
mod value_objects;

pub use selection::default_voice;
pub use value_objects::{VoiceDescriptor, VoiceName};
