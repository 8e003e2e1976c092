//! Sled-based Voice Preference Store Implementation
//!
//! 单键槽位：值为选中音色名称的 UTF-8 字符串，跨重启保留

use async_trait::async_trait;
use sled::Db;
use std::sync::Arc;

use crate::application::ports::{PreferenceError, PreferenceStorePort};

/// 固定的存储键
const SELECTED_VOICE_KEY: &str = "selected_voice";

/// Sled 存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/preferences.sled".to_string(),
        }
    }
}

/// Sled 音色偏好存储
pub struct SledPreferenceStore {
    db: Db,
}

impl SledPreferenceStore {
    /// 创建新的存储实例
    pub fn new(config: &SledStoreConfig) -> Result<Self, PreferenceError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| PreferenceError::DatabaseError(e.to_string()))?;

        tracing::info!(db_path = %config.db_path, "SledPreferenceStore initialized");

        Ok(Self { db })
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), PreferenceError> {
        self.db
            .flush()
            .map_err(|e| PreferenceError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStorePort for SledPreferenceStore {
    async fn load(&self) -> Result<Option<String>, PreferenceError> {
        match self.db.get(SELECTED_VOICE_KEY) {
            Ok(Some(data)) => {
                let name = String::from_utf8(data.to_vec())
                    .map_err(|e| PreferenceError::InvalidValue(e.to_string()))?;
                Ok(Some(name))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(PreferenceError::DatabaseError(e.to_string())),
        }
    }

    async fn save(&self, voice_name: &str) -> Result<(), PreferenceError> {
        self.db
            .insert(SELECTED_VOICE_KEY, voice_name.as_bytes())
            .map_err(|e| PreferenceError::DatabaseError(e.to_string()))?;

        // 偏好很小，写后直接落盘
        self.db
            .flush_async()
            .await
            .map_err(|e| PreferenceError::DatabaseError(e.to_string()))?;

        tracing::debug!(voice = %voice_name, "Voice preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let dir = tempdir().unwrap();
        let config = SledStoreConfig {
            db_path: dir.path().join("prefs.sled").to_string_lossy().to_string(),
        };
        let store = SledPreferenceStore::new(&config).unwrap();

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let config = SledStoreConfig {
            db_path: dir.path().join("prefs.sled").to_string_lossy().to_string(),
        };
        let store = SledPreferenceStore::new(&config).unwrap();

        store.save("Microsoft Maria - Feminina (pt-BR)").await.unwrap();
        assert_eq!(
            store.load().await.unwrap().as_deref(),
            Some("Microsoft Maria - Feminina (pt-BR)")
        );

        // 覆盖旧值
        store.save("Daniel").await.unwrap();
        assert_eq!(store.load().await.unwrap().as_deref(), Some("Daniel"));
    }

    #[tokio::test]
    async fn test_selection_survives_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("prefs.sled").to_string_lossy().to_string();

        {
            let store = SledPreferenceStore::new(&SledStoreConfig {
                db_path: db_path.clone(),
            })
            .unwrap();
            store.save("Luciana").await.unwrap();
        }

        let reopened = SledPreferenceStore::new(&SledStoreConfig { db_path }).unwrap();
        assert_eq!(reopened.load().await.unwrap().as_deref(), Some("Luciana"));
    }
}
