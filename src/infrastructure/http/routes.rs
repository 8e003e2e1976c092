//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/station            GET   电台状态与品牌信息
//! - /api/conversation       GET   完整对话日志
//! - /api/conversation/send  POST  发送听众消息
//! - /api/voices             GET   音色目录快照与选中音色
//! - /api/voices/select      POST  选中音色（持久化）
//! - /ws/events              WS    全局事件（回合追加/就绪/目录变化）
//! - /health                 GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/ws/events", get(handlers::events_websocket_handler))
        .route("/health", get(handlers::ping))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/station", get(handlers::get_station))
        .route("/conversation", get(handlers::get_conversation))
        .route("/conversation/send", post(handlers::send_message))
        .route("/voices", get(handlers::list_voices))
        .route("/voices/select", post(handlers::select_voice))
}
