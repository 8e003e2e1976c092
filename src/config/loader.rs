//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `VOXFM_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `VOXFM_SERVER__HOST=127.0.0.1`
/// - `VOXFM_SERVER__PORT=8080`
/// - `VOXFM_CHAT__API_KEY=...`
/// - `VOXFM_STATION__STARTUP_DELAY_MS=0`
///
/// 兼容性：`GEMINI_API_KEY` 在 `chat.api_key` 为空时作为密钥来源
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5080)?
        .set_default("server.static_files.enabled", true)?
        .set_default("server.static_files.dir", "web")?
        .set_default("station.startup_delay_ms", 2000)?
        .set_default("chat.timeout_secs", 0)?
        .set_default("chat.offline", false)?
        .set_default("speech.language", "pt-BR")?
        .set_default("speech.muted", false)?
        .set_default("preferences.db_path", "data/preferences.sled")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: VOXFM_
    // 层级分隔符: __ (双下划线)
    // 例如: VOXFM_CHAT__API_KEY=...
    builder = builder.add_source(
        Environment::with_prefix("VOXFM")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 密钥兼容来源：GEMINI_API_KEY
    if app_config.chat.api_key.is_empty() {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            app_config.chat.api_key = key;
        }
    }

    // 7. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证回复引擎地址
    if config.chat.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "Chat endpoint cannot be empty".to_string(),
        ));
    }

    // 验证问候语（进入 Ready 时要追加并朗读）
    if config.station.greeting.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Station greeting cannot be empty".to_string(),
        ));
    }

    // 验证偏好存储路径
    if config.preferences.db_path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Preferences database path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志；密钥只报告是否设置）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Station: {}", config.station.name);
    tracing::info!("Stream URL: {}", config.station.stream_url);
    tracing::info!("Startup Delay: {}ms", config.station.startup_delay_ms);
    tracing::info!("Chat Endpoint: {}", config.chat.endpoint);
    tracing::info!(
        "Chat API Key: {}",
        if config.chat.api_key.is_empty() {
            "<missing>"
        } else {
            "<set>"
        }
    );
    tracing::info!("Chat Offline Mode: {}", config.chat.offline);
    tracing::info!("Speech Language: {}", config.speech.language);
    tracing::info!("Speech Muted: {}", config.speech.muted);
    tracing::info!("Preferences DB: {}", config.preferences.db_path);
    tracing::info!("Widget Hosting: {}", config.server.static_files.enabled);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5080);
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_endpoint() {
        let mut config = AppConfig::default();
        config.chat.endpoint = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_blank_greeting() {
        let mut config = AppConfig::default();
        config.station.greeting = "   ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_db_path() {
        let mut config = AppConfig::default();
        config.preferences.db_path = String::new();
        assert!(validate_config(&config).is_err());
    }
}
