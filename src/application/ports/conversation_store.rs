//! Conversation Store Port - 对话日志存取
//!
//! 定义对话日志的抽象接口，具体实现在 infrastructure/memory 层
//!
//! 单一对话、仅追加、不持久化；追加由实现内部串行化

use async_trait::async_trait;

use crate::domain::conversation::Turn;

/// Conversation Store Port
#[async_trait]
pub trait ConversationStorePort: Send + Sync {
    /// 追加回合
    async fn append(&self, turn: Turn);

    /// 按追加顺序返回全部回合
    async fn turns(&self) -> Vec<Turn>;

    /// 当前回合数
    async fn len(&self) -> usize;
}
