//! Chat Commands - 对话相关命令

use crate::domain::conversation::Turn;

/// 发送听众消息命令
#[derive(Debug, Clone)]
pub struct SendMessage {
    /// 原始输入文本（处理器负责去空白和空检查）
    pub text: String,
}

/// 发送结果：本次追加的两个回合
#[derive(Debug, Clone)]
pub struct SendMessageResponse {
    pub user_turn: Turn,
    pub host_turn: Turn,
    /// 主播回合是否为固定的故障回退语
    pub fallback: bool,
}
