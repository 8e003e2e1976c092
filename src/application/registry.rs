//! Voice Registry - 音色目录快照与选中状态
//!
//! 包装平台语音引擎的目录能力:
//! - 缓存目录快照，收到目录变化信号后整体重查并覆盖
//! - 维护选中音色（启动时从偏好存储读取一次）
//! - 目录首次非空且无已存偏好时执行一次默认挑选并立即持久化
//!
//! 不变量: 选中音色要么是当前快照中的名称，要么缺省（目录为空时不强制）

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::application::error::ApplicationError;
use crate::application::ports::{PreferenceStorePort, SpeechSynthesizerPort};
use crate::domain::voice::{default_voice, VoiceDescriptor};
use crate::infrastructure::events::EventPublisher;

/// 音色目录注册表
pub struct VoiceRegistry {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    preferences: Arc<dyn PreferenceStorePort>,
    voices: RwLock<Vec<VoiceDescriptor>>,
    selected: RwLock<Option<String>>,
}

impl VoiceRegistry {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        preferences: Arc<dyn PreferenceStorePort>,
    ) -> Self {
        Self {
            synthesizer,
            preferences,
            voices: RwLock::new(Vec::new()),
            selected: RwLock::new(None),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 启动初始化: 读取已存偏好，然后做首次目录查询
    pub async fn bootstrap(&self) {
        match self.preferences.load().await {
            Ok(stored) => {
                if let Some(name) = &stored {
                    tracing::info!(voice = %name, "Stored voice preference loaded");
                }
                *self.selected.write().await = stored;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load voice preference, starting unselected");
            }
        }

        self.refresh().await;
    }

    /// 重新查询平台目录并覆盖快照
    ///
    /// 引擎查询失败保留旧快照（目录为空本身是合法状态，不算错误）
    pub async fn refresh(&self) {
        match self.synthesizer.voices().await {
            Ok(catalog) => {
                tracing::debug!(count = catalog.len(), "Voice catalog refreshed");
                *self.voices.write().await = catalog;
                self.apply_default_selection().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Voice catalog query failed, keeping previous snapshot");
            }
        }
    }

    /// 无已存偏好且目录非空时挑选默认音色并立即持久化
    async fn apply_default_selection(&self) {
        if self.selected.read().await.is_some() {
            return;
        }

        let picked = {
            let voices = self.voices.read().await;
            default_voice(&voices).map(|v| v.name().as_str().to_string())
        };

        if let Some(name) = picked {
            tracing::info!(voice = %name, "Default voice selected");
            *self.selected.write().await = Some(name.clone());
            if let Err(e) = self.preferences.save(&name).await {
                tracing::warn!(error = %e, "Failed to persist default voice preference");
            }
        }
    }

    /// 当前目录快照（平台顺序）
    pub async fn snapshot(&self) -> Vec<VoiceDescriptor> {
        self.voices.read().await.clone()
    }

    /// 当前选中的音色名称
    pub async fn selected_name(&self) -> Option<String> {
        self.selected.read().await.clone()
    }

    /// 选中名称在当前快照中的描述符
    ///
    /// 名称不在快照中（或未选中）返回 None，朗读时回落到平台默认音色
    pub async fn selected_voice(&self) -> Option<VoiceDescriptor> {
        let name = self.selected.read().await.clone()?;
        let voices = self.voices.read().await;
        voices.iter().find(|v| v.name().as_str() == name).cloned()
    }

    /// 选中一个目录内的音色并持久化
    pub async fn select(&self, name: &str) -> Result<VoiceDescriptor, ApplicationError> {
        let voice = {
            let voices = self.voices.read().await;
            voices
                .iter()
                .find(|v| v.name().as_str() == name)
                .cloned()
                .ok_or_else(|| ApplicationError::VoiceNotFound(name.to_string()))?
        };

        *self.selected.write().await = Some(name.to_string());

        // 持久化失败非致命
        if let Err(e) = self.preferences.save(name).await {
            tracing::warn!(error = %e, voice = %name, "Failed to persist voice preference");
        }

        tracing::info!(voice = %name, "Voice selected");
        Ok(voice)
    }

    /// 后台监听引擎的目录变化信号，每次信号触发重查并广播事件
    pub fn spawn_catalog_watch(
        self: Arc<Self>,
        publisher: Arc<EventPublisher>,
    ) -> JoinHandle<()> {
        let mut changed_rx = self.synthesizer.subscribe_catalog_changed();
        tokio::spawn(async move {
            while changed_rx.recv().await.is_ok() {
                self.refresh().await;
                publisher.publish_voice_catalog_changed(self.snapshot().await.len());
            }
            tracing::debug!("Voice catalog watch ended (engine dropped)");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{PreferenceError, SpeechError};
    use crate::domain::voice::VoiceName;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tokio::sync::broadcast;

    struct FakeSynthesizer {
        catalog: Mutex<Vec<VoiceDescriptor>>,
        changed_tx: broadcast::Sender<()>,
    }

    impl FakeSynthesizer {
        fn with_catalog(names: &[&str]) -> Self {
            let (changed_tx, _) = broadcast::channel(4);
            Self {
                catalog: Mutex::new(
                    names
                        .iter()
                        .map(|n| VoiceDescriptor::new(VoiceName::new(*n).unwrap(), "pt-BR"))
                        .collect(),
                ),
                changed_tx,
            }
        }
    }

    #[async_trait]
    impl SpeechSynthesizerPort for FakeSynthesizer {
        async fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
            Ok(self.catalog.lock().unwrap().clone())
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
    struct FakeStore {
        value: Mutex<Option<String>>,
    }

    #[async_trait]
    impl PreferenceStorePort for FakeStore {
        async fn load(&self) -> Result<Option<String>, PreferenceError> {
            Ok(self.value.lock().unwrap().clone())
        }

        async fn save(&self, voice_name: &str) -> Result<(), PreferenceError> {
            *self.value.lock().unwrap() = Some(voice_name.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_default_selection_prefers_feminina_and_persists() {
        let synth = Arc::new(FakeSynthesizer::with_catalog(&[
            "Microsoft Daniel - Portuguese (Brazil)",
            "Microsoft Maria - Feminina (pt-BR)",
        ]));
        let store = Arc::new(FakeStore::default());
        let registry = VoiceRegistry::new(synth, store.clone());

        registry.bootstrap().await;

        assert_eq!(
            registry.selected_name().await.as_deref(),
            Some("Microsoft Maria - Feminina (pt-BR)")
        );
        assert_eq!(
            store.value.lock().unwrap().as_deref(),
            Some("Microsoft Maria - Feminina (pt-BR)")
        );
    }

    #[tokio::test]
    async fn test_default_selection_falls_back_to_first() {
        let synth = Arc::new(FakeSynthesizer::with_catalog(&["Alex", "Daniel"]));
        let registry = VoiceRegistry::new(synth, Arc::new(FakeStore::default()));

        registry.bootstrap().await;

        assert_eq!(registry.selected_name().await.as_deref(), Some("Alex"));
    }

    #[tokio::test]
    async fn test_stored_preference_wins_over_default() {
        let synth = Arc::new(FakeSynthesizer::with_catalog(&["Alex", "Luciana"]));
        let store = Arc::new(FakeStore {
            value: Mutex::new(Some("Luciana".to_string())),
        });
        let registry = VoiceRegistry::new(synth, store);

        registry.bootstrap().await;

        assert_eq!(registry.selected_name().await.as_deref(), Some("Luciana"));
    }

    #[tokio::test]
    async fn test_empty_catalog_selects_nothing() {
        let synth = Arc::new(FakeSynthesizer::with_catalog(&[]));
        let registry = VoiceRegistry::new(synth, Arc::new(FakeStore::default()));

        registry.bootstrap().await;

        assert!(registry.selected_name().await.is_none());
        assert!(registry.selected_voice().await.is_none());
    }

    #[tokio::test]
    async fn test_selected_voice_missing_from_snapshot_resolves_none() {
        let synth = Arc::new(FakeSynthesizer::with_catalog(&["Alex"]));
        let store = Arc::new(FakeStore {
            value: Mutex::new(Some("Ghost Voice".to_string())),
        });
        let registry = VoiceRegistry::new(synth, store);

        registry.bootstrap().await;

        // 名称保留但解析不到描述符，朗读将使用平台默认音色
        assert_eq!(registry.selected_name().await.as_deref(), Some("Ghost Voice"));
        assert!(registry.selected_voice().await.is_none());
    }

    #[tokio::test]
    async fn test_select_rejects_unknown_voice() {
        let synth = Arc::new(FakeSynthesizer::with_catalog(&["Alex"]));
        let registry = VoiceRegistry::new(synth, Arc::new(FakeStore::default()));
        registry.bootstrap().await;

        let result = registry.select("Nope").await;
        assert!(matches!(result, Err(ApplicationError::VoiceNotFound(_))));
    }

    #[tokio::test]
    async fn test_catalog_change_signal_triggers_requery() {
        let synth = Arc::new(FakeSynthesizer::with_catalog(&[]));
        let store = Arc::new(FakeStore::default());
        let registry = VoiceRegistry::new(synth.clone(), store).arc();
        registry.bootstrap().await;
        assert!(registry.snapshot().await.is_empty());

        let publisher = EventPublisher::new().arc();
        let watch = registry.clone().spawn_catalog_watch(publisher.clone());
        let mut events = publisher.subscribe();

        // 平台随后装载目录并发出变化信号
        *synth.catalog.lock().unwrap() = vec![VoiceDescriptor::new(
            VoiceName::new("Microsoft Maria - Feminina (pt-BR)").unwrap(),
            "pt-BR",
        )];
        synth.changed_tx.send(()).unwrap();

        // 等待广播的目录变化事件，确认重查已完成
        let event = tokio::time::timeout(std::time::Duration::from_secs(1), events.recv())
            .await
            .expect("catalog change event not published")
            .unwrap();
        assert!(matches!(
            event,
            crate::infrastructure::events::WsEvent::VoiceCatalogChanged { .. }
        ));

        assert_eq!(registry.snapshot().await.len(), 1);
        assert_eq!(
            registry.selected_name().await.as_deref(),
            Some("Microsoft Maria - Feminina (pt-BR)")
        );

        watch.abort();
    }
}
