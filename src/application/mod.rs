//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer、ChatEngine、PreferenceStore、ConversationStore）
//! - registry: 音色目录快照与选中状态
//! - announcer: cancel-before-speak 朗读调度
//! - station: Loading → Ready 生命周期状态机
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod announcer;
pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod registry;
pub mod station;

// Re-exports
pub use commands::{
    // Chat commands
    SendMessage,
    SendMessageResponse,
    // Voice commands
    SelectVoice,
    SelectVoiceResponse,
    // Handlers
    handlers::{SelectVoiceHandler, SendMessageHandler, FALLBACK_REPLY},
};

pub use error::ApplicationError;

pub use ports::{
    // Chat engine
    ChatEnginePort,
    ChatError,
    ChatRequest,
    // Conversation store
    ConversationStorePort,
    // Preference store
    PreferenceError,
    PreferenceStorePort,
    // Speech synthesizer
    SpeechError,
    SpeechSynthesizerPort,
};

pub use queries::{
    // Chat queries
    GetConversation,
    // Station queries
    GetStation,
    // Voice queries
    ListVoices,
    // Handlers
    handlers::{
        Branding, GetConversationHandler, GetStationHandler, ListVoicesHandler, StationView,
        VoiceCatalogView, VoiceView,
    },
};

pub use announcer::Announcer;
pub use registry::VoiceRegistry;
pub use station::{Station, StationSettings, StationState};
