//! Chat Query Handlers

use std::sync::Arc;

use crate::application::ports::ConversationStorePort;
use crate::application::queries::GetConversation;
use crate::domain::conversation::Turn;

/// GetConversation Handler
pub struct GetConversationHandler {
    conversation: Arc<dyn ConversationStorePort>,
}

impl GetConversationHandler {
    pub fn new(conversation: Arc<dyn ConversationStorePort>) -> Self {
        Self { conversation }
    }

    pub async fn handle(&self, _query: GetConversation) -> Vec<Turn> {
        self.conversation.turns().await
    }
}
