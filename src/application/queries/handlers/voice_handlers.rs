//! Voice Query Handlers

use std::sync::Arc;

use crate::application::queries::ListVoices;
use crate::application::registry::VoiceRegistry;

// ============================================================================
// Response DTOs
// ============================================================================

/// 单个音色视图
#[derive(Debug, Clone)]
pub struct VoiceView {
    pub name: String,
    pub language: String,
}

/// 目录快照视图
#[derive(Debug, Clone)]
pub struct VoiceCatalogView {
    pub voices: Vec<VoiceView>,
    pub selected: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListVoices Handler
pub struct ListVoicesHandler {
    registry: Arc<VoiceRegistry>,
}

impl ListVoicesHandler {
    pub fn new(registry: Arc<VoiceRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, _query: ListVoices) -> VoiceCatalogView {
        let voices = self
            .registry
            .snapshot()
            .await
            .into_iter()
            .map(|v| VoiceView {
                name: v.name().as_str().to_string(),
                language: v.language().to_string(),
            })
            .collect();

        VoiceCatalogView {
            voices,
            selected: self.registry.selected_name().await,
        }
    }
}
