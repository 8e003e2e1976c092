//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    SelectVoiceHandler,
    SendMessageHandler,
    // Query handlers
    GetConversationHandler,
    GetStationHandler,
    ListVoicesHandler,
    // Services & ports
    Announcer,
    Branding,
    ChatEnginePort,
    ConversationStorePort,
    Station,
    VoiceRegistry,
};
use crate::infrastructure::events::EventPublisher;

/// 应用状态
pub struct AppState {
    // ========== Services ==========
    pub station: Arc<Station>,
    pub registry: Arc<VoiceRegistry>,
    pub event_publisher: Arc<EventPublisher>,

    // ========== Command Handlers ==========
    pub send_message_handler: SendMessageHandler,
    pub select_voice_handler: SelectVoiceHandler,

    // ========== Query Handlers ==========
    pub get_station_handler: GetStationHandler,
    pub get_conversation_handler: GetConversationHandler,
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        station: Arc<Station>,
        registry: Arc<VoiceRegistry>,
        announcer: Arc<Announcer>,
        conversation: Arc<dyn ConversationStorePort>,
        chat_engine: Arc<dyn ChatEnginePort>,
        event_publisher: Arc<EventPublisher>,
        branding: Branding,
    ) -> Self {
        Self {
            station: station.clone(),
            registry: registry.clone(),
            event_publisher: event_publisher.clone(),

            // Command handlers
            send_message_handler: SendMessageHandler::new(
                conversation.clone(),
                chat_engine,
                announcer,
                event_publisher.clone(),
            ),
            select_voice_handler: SelectVoiceHandler::new(registry.clone(), event_publisher),

            // Query handlers
            get_station_handler: GetStationHandler::new(station, branding),
            get_conversation_handler: GetConversationHandler::new(conversation),
            list_voices_handler: ListVoicesHandler::new(registry),
        }
    }
}
