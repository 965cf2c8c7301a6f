//! Generate Commands

/// 文本生成命令
#[derive(Debug, Clone, Default)]
pub struct GenerateText {
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub stream: bool,
}
