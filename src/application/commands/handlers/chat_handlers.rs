//! Chat Command Handlers - 发送消息编排
//!
//! sendMessage 流程（顺序固定）:
//! 1. 去空白校验，空消息不产生任何回合
//! 2. 立即追加听众回合并广播（乐观回显，先于网络往返可见）
//! 3. 调用回复引擎；任何失败收敛为固定回退语，细节只进日志
//! 4. 追加主播回合并广播，然后触发朗读
//!
//! 并发发送不做串行化，与来源行为一致：听众回合按到达顺序追加，
//! 主播回合按完成顺序追加（见 DESIGN.md）

use std::sync::Arc;

use crate::application::announcer::Announcer;
use crate::application::commands::chat_commands::{SendMessage, SendMessageResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{ChatEnginePort, ChatRequest, ConversationStorePort};
use crate::domain::conversation::{MessageText, Turn};
use crate::infrastructure::events::EventPublisher;

/// 固定回退语：远端失败时以主播口吻追加并照常朗读
pub const FALLBACK_REPLY: &str =
    "Desculpe, estou tendo problemas técnicos no momento. Pode tentar novamente?";

/// SendMessage Handler - 对话编排核心
pub struct SendMessageHandler {
    conversation: Arc<dyn ConversationStorePort>,
    chat_engine: Arc<dyn ChatEnginePort>,
    announcer: Arc<Announcer>,
    publisher: Arc<EventPublisher>,
}

impl SendMessageHandler {
    pub fn new(
        conversation: Arc<dyn ConversationStorePort>,
        chat_engine: Arc<dyn ChatEnginePort>,
        announcer: Arc<Announcer>,
        publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            conversation,
            chat_engine,
            announcer,
            publisher,
        }
    }

    pub async fn handle(&self, cmd: SendMessage) -> Result<SendMessageResponse, ApplicationError> {
        // 空消息: 零回合，直接拒绝
        let text = MessageText::new(cmd.text)
            .map_err(|_| ApplicationError::validation("Message is empty"))?;

        // 乐观回显：网络往返前听众回合已可见
        let user_turn = Turn::user(text.clone());
        self.conversation.append(user_turn.clone()).await;
        self.publisher.publish_turn_appended(&user_turn);

        let request = ChatRequest {
            user_text: text.as_str().to_string(),
        };

        let (reply, fallback) = match self.chat_engine.generate(request).await {
            Ok(raw) => match MessageText::new(raw) {
                Ok(reply) => (reply, false),
                Err(_) => {
                    tracing::error!("Chat engine returned an empty reply, using fallback");
                    (self.fallback_text()?, true)
                }
            },
            Err(e) => {
                // 细节只进日志，用户看到的永远是固定回退语
                tracing::error!(error = %e, "Chat engine request failed, using fallback");
                (self.fallback_text()?, true)
            }
        };

        let host_turn = Turn::host(reply);
        self.conversation.append(host_turn.clone()).await;
        self.publisher.publish_turn_appended(&host_turn);
        self.announcer.say(host_turn.content().as_str()).await;

        tracing::info!(
            user_turn = %user_turn.id(),
            host_turn = %host_turn.id(),
            fallback = fallback,
            "Message exchange completed"
        );

        Ok(SendMessageResponse {
            user_turn,
            host_turn,
            fallback,
        })
    }

    fn fallback_text(&self) -> Result<MessageText, ApplicationError> {
        MessageText::new(FALLBACK_REPLY)
            .map_err(|e| ApplicationError::internal(format!("Invalid fallback reply: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        ChatError, PreferenceError, PreferenceStorePort, SpeechError, SpeechSynthesizerPort,
    };
    use crate::application::registry::VoiceRegistry;
    use crate::domain::conversation::Role;
    use crate::domain::voice::VoiceDescriptor;
    use crate::infrastructure::memory::InMemoryConversationStore;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::broadcast;

    struct ScriptedEngine {
        reply: Result<String, ()>,
    }

    #[async_trait]
    impl ChatEnginePort for ScriptedEngine {
        async fn generate(&self, _request: ChatRequest) -> Result<String, ChatError> {
            self.reply
                .clone()
                .map_err(|_| ChatError::NetworkError("connection refused".to_string()))
        }
    }

    struct RecordingSynthesizer {
        spoken: Mutex<Vec<String>>,
        changed_tx: broadcast::Sender<()>,
    }

    impl RecordingSynthesizer {
        fn new() -> Self {
            let (changed_tx, _) = broadcast::channel(1);
            Self {
                spoken: Mutex::new(Vec::new()),
                changed_tx,
            }
        }
    }

    #[async_trait]
    impl SpeechSynthesizerPort for RecordingSynthesizer {
        async fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
            Ok(Vec::new())
        }

        async fn speak(
            &self,
            text: &str,
            _voice: Option<&VoiceDescriptor>,
        ) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(text.to_string());
            Ok(())
        }

        async fn cancel(&self) -> Result<(), SpeechError> {
            Ok(())
        }

        fn subscribe_catalog_changed(&self) -> broadcast::Receiver<()> {
            self.changed_tx.subscribe()
        }
    }

    struct NoStore;

    #[async_trait]
    impl PreferenceStorePort for NoStore {
        async fn load(&self) -> Result<Option<String>, PreferenceError> {
            Ok(None)
        }

        async fn save(&self, _voice_name: &str) -> Result<(), PreferenceError> {
            Ok(())
        }
    }

    fn handler_under_test(
        reply: Result<String, ()>,
    ) -> (
        SendMessageHandler,
        Arc<InMemoryConversationStore>,
        Arc<RecordingSynthesizer>,
    ) {
        let conversation = Arc::new(InMemoryConversationStore::new());
        let synth = Arc::new(RecordingSynthesizer::new());
        let registry = VoiceRegistry::new(synth.clone(), Arc::new(NoStore)).arc();
        let announcer = Announcer::new(synth.clone(), registry).arc();
        let handler = SendMessageHandler::new(
            conversation.clone(),
            Arc::new(ScriptedEngine { reply }),
            announcer,
            EventPublisher::new().arc(),
        );
        (handler, conversation, synth)
    }

    #[tokio::test]
    async fn test_send_appends_user_then_host_turn() {
        let (handler, conversation, synth) =
            handler_under_test(Ok("Led Zeppelin é lendário!".to_string()));

        let response = handler
            .handle(SendMessage {
                text: "  fala de Led Zeppelin  ".to_string(),
            })
            .await
            .unwrap();

        assert!(!response.fallback);

        let turns = conversation.turns().await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role(), Role::User);
        assert_eq!(turns[0].content().as_str(), "fala de Led Zeppelin");
        assert_eq!(turns[1].role(), Role::Host);
        assert_eq!(turns[1].content().as_str(), "Led Zeppelin é lendário!");

        // 回复被朗读
        assert_eq!(
            synth.spoken.lock().unwrap().as_slice(),
            ["Led Zeppelin é lendário!"]
        );
    }

    #[tokio::test]
    async fn test_empty_message_appends_nothing() {
        let (handler, conversation, synth) = handler_under_test(Ok("nunca chega".to_string()));

        let result = handler
            .handle(SendMessage {
                text: "   \t  ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
        assert_eq!(conversation.len().await, 0);
        assert!(synth.spoken.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_engine_failure_becomes_spoken_fallback() {
        let (handler, conversation, synth) = handler_under_test(Err(()));

        let response = handler
            .handle(SendMessage {
                text: "toca Metallica".to_string(),
            })
            .await
            .unwrap();

        assert!(response.fallback);

        let turns = conversation.turns().await;
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role(), Role::Host);
        assert_eq!(turns[1].content().as_str(), FALLBACK_REPLY);
        assert_eq!(synth.spoken.lock().unwrap().as_slice(), [FALLBACK_REPLY]);
    }

    #[tokio::test]
    async fn test_empty_engine_reply_becomes_fallback() {
        let (handler, conversation, _synth) = handler_under_test(Ok("   ".to_string()));

        let response = handler
            .handle(SendMessage {
                text: "oi".to_string(),
            })
            .await
            .unwrap();

        assert!(response.fallback);
        assert_eq!(
            conversation.turns().await[1].content().as_str(),
            FALLBACK_REPLY
        );
    }
}
