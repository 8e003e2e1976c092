//! Memory Layer - In-Memory State Management
//!
//! 对话日志的内存实现：单一对话，进程重启即清空

mod conversation_store;

pub use conversation_store::InMemoryConversationStore;
