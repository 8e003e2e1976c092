//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Conversation Context: 对话管理
//! - Voice Context: 音色管理

pub mod conversation;
pub mod voice;
