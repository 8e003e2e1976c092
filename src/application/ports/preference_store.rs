//! Preference Store Port - 音色偏好持久化
//!
//! 定义选中音色的单键持久化接口，具体实现使用 Sled
//!
//! 写入失败按规约视为非致命：调用方记录 warn 后继续

use async_trait::async_trait;
use thiserror::Error;

/// Preference Store 错误
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid stored value: {0}")]
    InvalidValue(String),
}

/// Preference Store Port
#[async_trait]
pub trait PreferenceStorePort: Send + Sync {
    /// 读取已存的音色名称
    async fn load(&self) -> Result<Option<String>, PreferenceError>;

    /// 保存音色名称（覆盖旧值）
    async fn save(&self, voice_name: &str) -> Result<(), PreferenceError>;
}
