//! In-Memory Conversation Store Implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::ConversationStorePort;
use crate::domain::conversation::{Conversation, Turn};

/// 内存对话日志
///
/// 写锁串行化追加：回合顺序即事件到达顺序，追加之间不会交错
pub struct InMemoryConversationStore {
    conversation: RwLock<Conversation>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self {
            conversation: RwLock::new(Conversation::new()),
        }
    }
}

impl Default for InMemoryConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConversationStorePort for InMemoryConversationStore {
    async fn append(&self, turn: Turn) {
        let mut conversation = self.conversation.write().await;
        conversation.append(turn);
        tracing::debug!(turns = conversation.len(), "Turn appended");
    }

    async fn turns(&self) -> Vec<Turn> {
        self.conversation.read().await.turns().to_vec()
    }

    async fn len(&self) -> usize {
        self.conversation.read().await.len()
    }
}
