//! Voice Queries

/// 列出音色目录快照与选中音色查询
#[derive(Debug, Clone)]
pub struct ListVoices;
