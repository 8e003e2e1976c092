//! Conversation Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("消息内容不能为空")]
    EmptyMessage,
}
