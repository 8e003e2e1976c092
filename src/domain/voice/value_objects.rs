//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

/// 音色名称
///
/// 平台目录内在单次会话中唯一，作为选中音色的键
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceName(String);

impl VoiceName {
    pub fn new(name: impl Into<String>) -> Result<Self, &'static str> {
        let name = name.into();
        if name.is_empty() {
            return Err("音色名称不能为空");
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音色描述符
///
/// 完全由平台语音目录提供；本系统只读取和选择，不创建不修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    name: VoiceName,
    language: String,
}

impl VoiceDescriptor {
    pub fn new(name: VoiceName, language: impl Into<String>) -> Self {
        Self {
            name,
            language: language.into(),
        }
    }

    pub fn name(&self) -> &VoiceName {
        &self.name
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_name_rejects_empty() {
        assert!(VoiceName::new("").is_err());
        assert!(VoiceName::new("Luciana").is_ok());
    }

    #[test]
    fn test_descriptor_getters() {
        let voice = VoiceDescriptor::new(VoiceName::new("Luciana").unwrap(), "pt-BR");
        assert_eq!(voice.name().as_str(), "Luciana");
        assert_eq!(voice.language(), "pt-BR");
    }
}
