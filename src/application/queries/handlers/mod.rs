//! Query Handlers

mod chat_handlers;
mod station_handlers;
mod voice_handlers;

pub use chat_handlers::GetConversationHandler;
pub use station_handlers::{Branding, GetStationHandler, StationView};
pub use voice_handlers::{ListVoicesHandler, VoiceCatalogView, VoiceView};
