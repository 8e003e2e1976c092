//! Event Publisher Implementation
//!
//! WebSocket 事件推送实现
//!
//! 单一对话、单一全局广播通道；前端靠 TurnAppended 驱动重绘和
//! 自动滚动，而不是轮询

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::domain::conversation::Turn;

/// WebSocket 事件类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum WsEvent {
    /// 开场延迟结束，电台可交互
    StationReady,
    /// 对话追加了一个回合
    TurnAppended {
        turn_id: String,
        role: String,
        content: String,
        created_at: String,
    },
    /// 平台音色目录已变化并完成重查
    VoiceCatalogChanged { voice_count: usize },
    /// 选中音色已切换
    VoiceSelected { name: String },
}

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<WsEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(100);
        Self { channel: tx }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅全局事件
    pub fn subscribe(&self) -> broadcast::Receiver<WsEvent> {
        self.channel.subscribe()
    }

    /// 发布电台就绪事件
    pub fn publish_station_ready(&self) {
        self.publish(WsEvent::StationReady);
    }

    /// 发布回合追加事件
    pub fn publish_turn_appended(&self, turn: &Turn) {
        self.publish(WsEvent::TurnAppended {
            turn_id: turn.id().to_string(),
            role: turn.role().as_str().to_string(),
            content: turn.content().as_str().to_string(),
            created_at: turn.created_at().to_rfc3339(),
        });
    }

    /// 发布目录变化事件
    pub fn publish_voice_catalog_changed(&self, voice_count: usize) {
        self.publish(WsEvent::VoiceCatalogChanged { voice_count });
    }

    /// 发布音色切换事件
    pub fn publish_voice_selected(&self, name: &str) {
        self.publish(WsEvent::VoiceSelected {
            name: name.to_string(),
        });
    }

    fn publish(&self, event: WsEvent) {
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(error = %e, "Failed to publish event (no receivers)");
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::MessageText;

    #[tokio::test]
    async fn test_subscriber_receives_turn_event() {
        let publisher = EventPublisher::new();
        let mut rx = publisher.subscribe();

        let turn = Turn::host(MessageText::new("no ar!").unwrap());
        publisher.publish_turn_appended(&turn);

        match rx.recv().await.unwrap() {
            WsEvent::TurnAppended { role, content, .. } => {
                assert_eq!(role, "host");
                assert_eq!(content, "no ar!");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_publish_without_receivers_is_silent() {
        let publisher = EventPublisher::new();
        // 无订阅者时不应 panic
        publisher.publish_station_ready();
        publisher.publish_voice_selected("Maria");
    }

    #[test]
    fn test_event_serialization_shape() {
        let event = WsEvent::VoiceCatalogChanged { voice_count: 3 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "VoiceCatalogChanged");
        assert_eq!(json["data"]["voice_count"], 3);
    }
}
