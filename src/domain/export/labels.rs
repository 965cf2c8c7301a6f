//! 导出段落标签

use serde::Deserialize;

/// 标签语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportLanguage {
    /// 中文标签
    #[default]
    Zh,
    /// 英文标签
    En,
}

impl ExportLanguage {
    pub fn labels(&self) -> ExportLabels {
        match self {
            ExportLanguage::Zh => ExportLabels::zh(),
            ExportLanguage::En => ExportLabels::en(),
        }
    }
}

/// 各段落的标题文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportLabels {
    pub title: &'static str,
    pub characters: &'static str,
    pub knowledge: &'static str,
    pub prompt_library: &'static str,
    pub content: &'static str,
}

impl ExportLabels {
    pub fn zh() -> Self {
        Self {
            title: "标题",
            characters: "角色设定",
            knowledge: "关联知识",
            prompt_library: "提示词库",
            content: "正文内容",
        }
    }

    pub fn en() -> Self {
        Self {
            title: "Title",
            characters: "Character Settings",
            knowledge: "Related Knowledge",
            prompt_library: "Prompt Library",
            content: "Body Content",
        }
    }
}

impl Default for ExportLabels {
    fn default() -> Self {
        Self::zh()
    }
}
