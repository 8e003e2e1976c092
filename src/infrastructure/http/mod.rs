//! HTTP Layer - RESTful API + WebSocket
//!
//! 电台聊天挂件的对外接口

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig, StaticFiles};
pub use state::AppState;
