//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod chat;
pub mod speech;

pub use chat::*;
pub use speech::*;
