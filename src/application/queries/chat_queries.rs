//! Chat Queries

/// 获取完整对话日志查询
#[derive(Debug, Clone)]
pub struct GetConversation;
