//! voxfm - Rádio Tatuapé FM 的 AI 主播聊天服务
//!
//! 组装顺序:
//! - Adapters: 语音引擎（speech feature 决定平台/静音）、回复引擎、偏好存储
//! - Application: 注册表 → 朗读调度 → 电台生命周期
//! - Infrastructure: 事件发布、HTTP 服务器（带优雅关闭）

use std::sync::Arc;
use std::time::Duration;

use voxfm::application::{
    Announcer, Branding, ChatEnginePort, SpeechSynthesizerPort, Station, StationSettings,
    VoiceRegistry,
};
use voxfm::config::{load_config, print_config, AppConfig};
use voxfm::infrastructure::adapters::{
    GeminiClient, GeminiClientConfig, MutedSynthesizer, ScriptedChatClient,
};
use voxfm::infrastructure::events::EventPublisher;
use voxfm::infrastructure::http::{AppState, HttpServer, ServerConfig, StaticFiles};
use voxfm::infrastructure::memory::InMemoryConversationStore;
use voxfm::infrastructure::persistence::sled::{SledPreferenceStore, SledStoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},voxfm={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("voxfm - Rádio Tatuapé FM AI host service");
    print_config(&config);

    if config.chat.api_key.is_empty() && !config.chat.offline {
        tracing::warn!(
            "No chat API key configured; remote requests will fail and listeners \
             will hear the fallback reply"
        );
    }

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.preferences.db_path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 创建偏好存储
    let preference_store = SledPreferenceStore::new(&SledStoreConfig {
        db_path: config.preferences.db_path.clone(),
    })
    .map_err(|e| anyhow::anyhow!("Failed to open preference store: {}", e))?
    .arc();

    // 创建语音引擎
    let synthesizer = build_synthesizer(&config)?;

    // 创建回复引擎
    let chat_engine = build_chat_engine(&config)?;

    // 创建事件发布器
    let event_publisher = EventPublisher::new().arc();

    // 创建音色注册表并初始化（读偏好 + 首次目录查询 + 默认挑选）
    let registry = VoiceRegistry::new(synthesizer.clone(), preference_store).arc();
    registry.bootstrap().await;
    let _catalog_watch = registry
        .clone()
        .spawn_catalog_watch(event_publisher.clone());

    // 创建朗读调度与对话日志
    let announcer = Announcer::new(synthesizer, registry.clone()).arc();
    let conversation: Arc<InMemoryConversationStore> =
        Arc::new(InMemoryConversationStore::new());

    // 创建电台生命周期并启动开场流程
    let station = Station::new(
        StationSettings {
            startup_delay: Duration::from_millis(config.station.startup_delay_ms),
            greeting: config.station.greeting.clone(),
        },
        conversation.clone(),
        announcer.clone(),
        event_publisher.clone(),
    )
    .arc();
    let _opening = station.clone().spawn_opening();

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_static_files(StaticFiles {
            enabled: config.server.static_files.enabled,
            dir: config.server.static_files.dir.clone(),
        });
    let state = AppState::new(
        station,
        registry,
        announcer,
        conversation,
        chat_engine,
        event_publisher,
        Branding {
            name: config.station.name.clone(),
            tagline: config.station.tagline.clone(),
            stream_url: config.station.stream_url.clone(),
        },
    );

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 按编译特性和配置挑选语音引擎
fn build_synthesizer(config: &AppConfig) -> anyhow::Result<Arc<dyn SpeechSynthesizerPort>> {
    if config.speech.muted {
        return Ok(Arc::new(MutedSynthesizer::new()));
    }

    #[cfg(feature = "speech")]
    {
        use voxfm::infrastructure::adapters::SystemSynthesizer;
        match SystemSynthesizer::new(config.speech.language.clone()) {
            Ok(synthesizer) => return Ok(Arc::new(synthesizer)),
            Err(e) => {
                // 平台语音服务不可用时降级为静音，会话保持可交互
                tracing::warn!(error = %e, "Platform speech engine unavailable, muting output");
            }
        }
    }

    Ok(Arc::new(MutedSynthesizer::new()))
}

/// 按配置挑选回复引擎
fn build_chat_engine(config: &AppConfig) -> anyhow::Result<Arc<dyn ChatEnginePort>> {
    if config.chat.offline {
        return Ok(Arc::new(ScriptedChatClient::with_defaults()));
    }

    let client = GeminiClient::new(GeminiClientConfig {
        endpoint: config.chat.endpoint.clone(),
        api_key: config.chat.api_key.clone(),
        timeout_secs: config.chat.timeout_secs,
    })
    .map_err(|e| anyhow::anyhow!("Failed to build chat client: {}", e))?;

    Ok(Arc::new(client))
}
