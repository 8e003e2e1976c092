//! Voice Command Handlers

use std::sync::Arc;

use crate::application::commands::voice_commands::{SelectVoice, SelectVoiceResponse};
use crate::application::error::ApplicationError;
use crate::application::registry::VoiceRegistry;
use crate::infrastructure::events::EventPublisher;

/// SelectVoice Handler - 切换选中音色并持久化
pub struct SelectVoiceHandler {
    registry: Arc<VoiceRegistry>,
    publisher: Arc<EventPublisher>,
}

impl SelectVoiceHandler {
    pub fn new(registry: Arc<VoiceRegistry>, publisher: Arc<EventPublisher>) -> Self {
        Self {
            registry,
            publisher,
        }
    }

    pub async fn handle(&self, cmd: SelectVoice) -> Result<SelectVoiceResponse, ApplicationError> {
        let voice = self.registry.select(&cmd.name).await?;

        self.publisher.publish_voice_selected(voice.name().as_str());

        Ok(SelectVoiceResponse {
            name: voice.name().as_str().to_string(),
            language: voice.language().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        PreferenceError, PreferenceStorePort, SpeechError, SpeechSynthesizerPort,
    };
    use crate::domain::voice::{VoiceDescriptor, VoiceName};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::broadcast;

    struct FixedSynthesizer {
        changed_tx: broadcast::Sender<()>,
    }

    impl FixedSynthesizer {
        fn new() -> Self {
            let (changed_tx, _) = broadcast::channel(1);
            Self { changed_tx }
        }
    }

    #[async_trait]
    impl SpeechSynthesizerPort for FixedSynthesizer {
        async fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
            Ok(vec![
                VoiceDescriptor::new(VoiceName::new("Daniel").unwrap(), "pt-BR"),
                VoiceDescriptor::new(VoiceName::new("Maria - Feminina").unwrap(), "pt-BR"),
            ])
        }

        async fn speak(
            &self,
            _text: &str,
            _voice: Option<&VoiceDescriptor>,
        ) -> Result<(), SpeechError> {
            Ok(())
        }

        async fn cancel(&self) -> Result<(), SpeechError> {
            Ok(())
        }

        fn subscribe_catalog_changed(&self) -> broadcast::Receiver<()> {
            self.changed_tx.subscribe()
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        value: Mutex<Option<String>>,
    }

    #[async_trait]
    impl PreferenceStorePort for MemoryStore {
        async fn load(&self) -> Result<Option<String>, PreferenceError> {
            Ok(self.value.lock().unwrap().clone())
        }

        async fn save(&self, voice_name: &str) -> Result<(), PreferenceError> {
            *self.value.lock().unwrap() = Some(voice_name.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_select_persists_and_reports_language() {
        let store = Arc::new(MemoryStore::default());
        let registry =
            VoiceRegistry::new(Arc::new(FixedSynthesizer::new()), store.clone()).arc();
        registry.bootstrap().await;
        let handler = SelectVoiceHandler::new(registry, EventPublisher::new().arc());

        let response = handler
            .handle(SelectVoice {
                name: "Daniel".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.name, "Daniel");
        assert_eq!(response.language, "pt-BR");
        assert_eq!(store.value.lock().unwrap().as_deref(), Some("Daniel"));
    }

    #[tokio::test]
    async fn test_select_unknown_voice_fails() {
        let registry = VoiceRegistry::new(
            Arc::new(FixedSynthesizer::new()),
            Arc::new(MemoryStore::default()),
        )
        .arc();
        registry.bootstrap().await;
        let handler = SelectVoiceHandler::new(registry, EventPublisher::new().arc());

        let result = handler
            .handle(SelectVoice {
                name: "Inexistente".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::VoiceNotFound(_))));
    }
}
