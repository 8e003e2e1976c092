//! voxfm - Rádio Tatuapé FM 的 AI 主播聊天服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Conversation Context: 对话日志上下文
//! - Voice Context: 音色上下文
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechSynthesizer, ChatEngine, PreferenceStore, ConversationStore）
//! - Registry: 音色目录快照与选中状态
//! - Announcer / Station: 朗读调度与电台生命周期
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + WebSocket + 挂件静态托管
//! - Memory: 对话日志内存实现
//! - Persistence: Sled 音色偏好存储
//! - Adapters: Gemini 回复引擎、平台语音合成
//! - Events: WebSocket 事件发布

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
