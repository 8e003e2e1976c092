//! Chat Adapter - 生成式回复引擎实现

mod gemini_client;
mod scripted_client;

pub use gemini_client::{GeminiClient, GeminiClientConfig};
pub use scripted_client::{ScriptedChatClient, ScriptedChatClientConfig};
