//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chat_engine;
mod conversation_store;
mod preference_store;
mod speech;

pub use chat_engine::{ChatEnginePort, ChatError, ChatRequest};
pub use conversation_store::ConversationStorePort;
pub use preference_store::{PreferenceError, PreferenceStorePort};
pub use speech::{SpeechError, SpeechSynthesizerPort};
