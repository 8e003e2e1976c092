//! Conversation Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MessageText, Role, TurnId};

/// 对话回合
///
/// 创建后不可变；追加到 Conversation 后既是展示顺序也是朗读顺序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    id: TurnId,
    role: Role,
    content: MessageText,
    created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, content: MessageText) -> Self {
        Self {
            id: TurnId::new(),
            role,
            content,
            created_at: Utc::now(),
        }
    }

    /// 创建听众回合
    pub fn user(content: MessageText) -> Self {
        Self::new(Role::User, content)
    }

    /// 创建主播回合
    pub fn host(content: MessageText) -> Self {
        Self::new(Role::Host, content)
    }

    // Getters
    pub fn id(&self) -> &TurnId {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &MessageText {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Conversation 聚合根
///
/// 不变量:
/// - 仅追加，已有回合不可删除或修改
/// - 回合顺序即追加顺序
/// - 不持久化，进程重启后清空
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// 追加回合
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
