//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 电台配置
    #[serde(default)]
    pub station: StationConfig,

    /// 回复引擎配置
    #[serde(default)]
    pub chat: ChatConfig,

    /// 语音输出配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 偏好存储配置
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否托管挂件页面
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

fn default_static_enabled() -> bool {
    // 挂件即产品界面，默认托管
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 电台配置
#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    /// 电台名称
    #[serde(default = "default_station_name")]
    pub name: String,

    /// 标语
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// "OUVIR AO VIVO" 直播流地址
    #[serde(default = "default_stream_url")]
    pub stream_url: String,

    /// 进入 Ready 时的固定问候语
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// 开场延迟（毫秒）
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,
}

fn default_station_name() -> String {
    "RÁDIO TATUAPÉ FM".to_string()
}

fn default_tagline() -> String {
    "Sua rádio com IA".to_string()
}

fn default_stream_url() -> String {
    "https://radiotatuapefm.radiostream321.com/".to_string()
}

fn default_greeting() -> String {
    "Olá! Eu sou BAI VOZ, sua locutora virtual especialista em rock! Estou aqui para \
     conversar sobre música, especialmente sobre classic rock, hard rock e heavy metal. \
     Como posso ajudar você hoje?"
        .to_string()
}

fn default_startup_delay_ms() -> u64 {
    2000
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            name: default_station_name(),
            tagline: default_tagline(),
            stream_url: default_stream_url(),
            greeting: default_greeting(),
            startup_delay_ms: default_startup_delay_ms(),
        }
    }
}

/// 回复引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// 生成接口完整 URL
    #[serde(default = "default_chat_endpoint")]
    pub endpoint: String,

    /// Bearer 密钥（来自环境: VOXFM_CHAT__API_KEY 或 GEMINI_API_KEY）
    #[serde(default)]
    pub api_key: String,

    /// 请求超时（秒），0 表示不限（与来源行为一致）
    #[serde(default)]
    pub timeout_secs: u64,

    /// 离线模式：不调远端，使用固定台本回复
    #[serde(default)]
    pub offline: bool,
}

fn default_chat_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent".to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: default_chat_endpoint(),
            api_key: String::new(),
            timeout_secs: 0,
            offline: false,
        }
    }
}

/// 语音输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// 未选中音色时的语言倾向
    #[serde(default = "default_language")]
    pub language: String,

    /// 强制静音（即使编译了 speech feature）
    #[serde(default)]
    pub muted: bool,
}

fn default_language() -> String {
    "pt-BR".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            muted: false,
        }
    }
}

/// 偏好存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    /// Sled 数据库路径
    #[serde(default = "default_preferences_path")]
    pub db_path: String,
}

fn default_preferences_path() -> String {
    "data/preferences.sled".to_string()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            db_path: default_preferences_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
