//! Station - 电台生命周期状态机
//!
//! 一次性状态迁移 Loading → Ready:
//! 启动后等待固定的开场延迟，进入 Ready 时把固定问候语追加为
//! 主播回合并朗读一次。迁移不可逆，进程内只发生一次。

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::application::announcer::Announcer;
use crate::application::ports::ConversationStorePort;
use crate::domain::conversation::{MessageText, Turn};
use crate::infrastructure::events::EventPublisher;

/// 电台状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StationState {
    /// 开场延迟中
    Loading,
    /// 可交互
    Ready,
}

/// 电台开场参数
#[derive(Debug, Clone)]
pub struct StationSettings {
    /// 开场延迟
    pub startup_delay: Duration,
    /// 进入 Ready 时的固定问候语
    pub greeting: String,
}

/// 电台生命周期
pub struct Station {
    settings: StationSettings,
    state: RwLock<StationState>,
    conversation: Arc<dyn ConversationStorePort>,
    announcer: Arc<Announcer>,
    publisher: Arc<EventPublisher>,
}

impl Station {
    pub fn new(
        settings: StationSettings,
        conversation: Arc<dyn ConversationStorePort>,
        announcer: Arc<Announcer>,
        publisher: Arc<EventPublisher>,
    ) -> Self {
        Self {
            settings,
            state: RwLock::new(StationState::Loading),
            conversation,
            announcer,
            publisher,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn state(&self) -> StationState {
        *self.state.read().await
    }

    /// 启动开场流程（后台任务）
    pub fn spawn_opening(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move { self.open().await })
    }

    /// 开场: 延迟 → Ready → 问候语追加并朗读
    async fn open(&self) {
        tokio::time::sleep(self.settings.startup_delay).await;

        {
            let mut state = self.state.write().await;
            if *state == StationState::Ready {
                return;
            }
            *state = StationState::Ready;
        }

        tracing::info!(
            delay_ms = self.settings.startup_delay.as_millis() as u64,
            "Station ready"
        );
        self.publisher.publish_station_ready();

        let greeting = match MessageText::new(&self.settings.greeting) {
            Ok(text) => text,
            Err(e) => {
                // 配置校验保证问候语非空，这里只守住日志
                tracing::warn!(error = %e, "Greeting text is empty, skipping opening turn");
                return;
            }
        };

        let turn = Turn::host(greeting);
        self.conversation.append(turn.clone()).await;
        self.publisher.publish_turn_appended(&turn);
        self.announcer.say(turn.content().as_str()).await;
    }
}
