//! Voice Context - 默认音色挑选
//!
//! 首次运行且无已存偏好时执行一次:
//! 按目录顺序扫描，取第一个名称含 "female" 或 "feminina"（忽略大小写）
//! 的音色；都不匹配则取目录第一项；目录为空则不选

use super::VoiceDescriptor;

/// 默认挑选关键字
const FEMALE_HINTS: &[&str] = &["female", "feminina"];

/// 按启发式挑选默认音色
pub fn default_voice(voices: &[VoiceDescriptor]) -> Option<&VoiceDescriptor> {
    voices
        .iter()
        .find(|voice| {
            let name = voice.name().as_str().to_lowercase();
            FEMALE_HINTS.iter().any(|hint| name.contains(hint))
        })
        .or_else(|| voices.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::VoiceName;

    fn voice(name: &str, language: &str) -> VoiceDescriptor {
        VoiceDescriptor::new(VoiceName::new(name).unwrap(), language)
    }

    #[test]
    fn test_picks_feminina_match() {
        let voices = vec![
            voice("Microsoft Daniel - Portuguese (Brazil)", "pt-BR"),
            voice("Microsoft Maria - Feminina (pt-BR)", "pt-BR"),
            voice("Google português do Brasil", "pt-BR"),
        ];
        let picked = default_voice(&voices).unwrap();
        assert_eq!(picked.name().as_str(), "Microsoft Maria - Feminina (pt-BR)");
    }

    #[test]
    fn test_picks_female_match_case_insensitive() {
        let voices = vec![
            voice("Alex", "en-US"),
            voice("Samantha (FEMALE)", "en-US"),
        ];
        let picked = default_voice(&voices).unwrap();
        assert_eq!(picked.name().as_str(), "Samantha (FEMALE)");
    }

    #[test]
    fn test_falls_back_to_first_voice() {
        let voices = vec![
            voice("Alex", "en-US"),
            voice("Daniel", "pt-BR"),
        ];
        let picked = default_voice(&voices).unwrap();
        assert_eq!(picked.name().as_str(), "Alex");
    }

    #[test]
    fn test_empty_catalog_selects_nothing() {
        assert!(default_voice(&[]).is_none());
    }
}
