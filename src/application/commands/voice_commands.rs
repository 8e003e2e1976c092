//! Voice Commands - 音色相关命令

/// 选中音色命令
#[derive(Debug, Clone)]
pub struct SelectVoice {
    /// 目录快照内的音色名称
    pub name: String,
}

/// 选中结果
#[derive(Debug, Clone)]
pub struct SelectVoiceResponse {
    pub name: String,
    pub language: String,
}
