//! Command Handlers

mod chat_handlers;
mod voice_handlers;

pub use chat_handlers::{SendMessageHandler, FALLBACK_REPLY};
pub use voice_handlers::SelectVoiceHandler;
