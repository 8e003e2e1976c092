//! System Synthesizer - 平台语音引擎
//!
//! 通过 `tts` crate 调用平台语音服务（Linux: speech-dispatcher,
//! macOS: AVSpeechSynthesizer, Windows: WinRT）
//!
//! 固定参数：中性音高和语速；语言倾向 pt-BR（未选中音色时优先挑
//! 语言前缀匹配的平台音色，没有再交给引擎默认）

use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::broadcast;
use tts::Tts;

use crate::application::ports::{SpeechError, SpeechSynthesizerPort};
use crate::domain::voice::{VoiceDescriptor, VoiceName};

/// 平台语音引擎
pub struct SystemSynthesizer {
    engine: Mutex<Tts>,
    /// 未选中音色时的语言倾向（如 "pt-BR"）
    language: String,
    // 平台目录在引擎初始化后不再变化，通道保留给订阅接口
    changed_tx: broadcast::Sender<()>,
}

impl SystemSynthesizer {
    /// 初始化平台引擎并固定中性音高/语速
    pub fn new(language: impl Into<String>) -> Result<Self, SpeechError> {
        let mut engine =
            Tts::default().map_err(|e| SpeechError::EngineUnavailable(e.to_string()))?;

        let pitch = engine.normal_pitch();
        if let Err(e) = engine.set_pitch(pitch) {
            tracing::warn!(error = %e, "Failed to set neutral pitch");
        }
        let rate = engine.normal_rate();
        if let Err(e) = engine.set_rate(rate) {
            tracing::warn!(error = %e, "Failed to set neutral rate");
        }

        let (changed_tx, _) = broadcast::channel(1);
        let language = language.into();

        tracing::info!(language = %language, "SystemSynthesizer initialized");

        Ok(Self {
            engine: Mutex::new(engine),
            language,
            changed_tx,
        })
    }

    /// 按名称（其次按语言倾向）挑出要交给引擎的平台音色
    fn resolve_platform_voice(
        catalog: &[tts::Voice],
        wanted: Option<&VoiceDescriptor>,
        language: &str,
    ) -> Option<tts::Voice> {
        if let Some(descriptor) = wanted {
            // 名称不在目录中不报错，回落到语言倾向/引擎默认
            if let Some(voice) = catalog
                .iter()
                .find(|v| v.name() == descriptor.name().as_str())
            {
                return Some(voice.clone());
            }
        }

        catalog
            .iter()
            .find(|v| format!("{}", v.language()).starts_with(language))
            .cloned()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for SystemSynthesizer {
    async fn voices(&self) -> Result<Vec<VoiceDescriptor>, SpeechError> {
        let engine = self.engine.lock().unwrap();
        let catalog = engine
            .voices()
            .map_err(|e| SpeechError::EngineUnavailable(e.to_string()))?;

        // 无法命名的条目跳过，目录保持平台顺序
        Ok(catalog
            .iter()
            .filter_map(|voice| {
                let name = VoiceName::new(voice.name()).ok()?;
                Some(VoiceDescriptor::new(name, format!("{}", voice.language())))
            })
            .collect())
    }

    async fn speak(&self, text: &str, voice: Option<&VoiceDescriptor>) -> Result<(), SpeechError> {
        let mut engine = self.engine.lock().unwrap();

        let catalog = engine
            .voices()
            .map_err(|e| SpeechError::EngineUnavailable(e.to_string()))?;
        if let Some(platform_voice) =
            Self::resolve_platform_voice(&catalog, voice, &self.language)
        {
            if let Err(e) = engine.set_voice(&platform_voice) {
                tracing::warn!(error = %e, "Failed to set voice, using engine default");
            }
        }

        // interrupt=true: 引擎侧同样抢占在播语音
        engine
            .speak(text, true)
            .map(|_| ())
            .map_err(|e| SpeechError::SynthesisFailed(e.to_string()))
    }

    async fn cancel(&self) -> Result<(), SpeechError> {
        let mut engine = self.engine.lock().unwrap();
        engine
            .stop()
            .map(|_| ())
            .map_err(|e| SpeechError::SynthesisFailed(e.to_string()))
    }

    fn subscribe_catalog_changed(&self) -> broadcast::Receiver<()> {
        self.changed_tx.subscribe()
    }
}
