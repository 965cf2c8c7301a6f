//! 结构化文档模型
//!
//! 与具体文件格式无关的层级结构，由 DOCX 适配器序列化。

use super::NovelSections;

/// 文档块
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// 标题，level 0 为文档标题
    Heading { level: u8, text: String },
    /// 段落（可为空）
    Paragraph(String),
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(text.into())
    }

    pub fn spacer() -> Self {
        Block::Paragraph(String::new())
    }
}

/// 结构化文档
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// 由段落视图构建文档
    ///
    /// 标题后、每个笔记段落后各有一个空段落作为间隔；
    /// 每一行文本对应一个段落。
    pub fn from_sections(sections: &NovelSections<'_>) -> Self {
        let mut doc = Self::new();
        doc.push(Block::heading(0, sections.title));
        doc.push(Block::spacer());

        for section in &sections.notes {
            doc.push(Block::heading(2, section.heading));
            doc.extend_lines(section.lines());
            doc.push(Block::spacer());
        }

        doc.push(Block::heading(1, sections.body.heading));
        doc.extend_lines(sections.body.lines());
        doc
    }

    fn extend_lines<'a>(&mut self, lines: impl Iterator<Item = &'a str>) {
        self.blocks.extend(lines.map(Block::paragraph));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::export::ExportLabels;
    use crate::domain::novel::{Novel, NovelPatch, Title};

    #[test]
    fn test_minimal_document() {
        let novel = Novel::new(Title::new("空白").unwrap(), None);
        let labels = ExportLabels::en();
        let doc = Document::from_sections(&NovelSections::compose(&novel, &labels));

        assert_eq!(
            doc.blocks(),
            &[
                Block::heading(0, "空白"),
                Block::spacer(),
                Block::heading(1, "Body Content"),
                Block::paragraph(""),
            ]
        );
    }

    #[test]
    fn test_document_with_notes() {
        let mut novel = Novel::new(Title::new("T").unwrap(), Some("l1\n\nl3".to_string()));
        novel
            .apply(NovelPatch {
                knowledge: Some("k1\nk2".to_string()),
                ..Default::default()
            })
            .unwrap();
        let labels = ExportLabels::en();
        let doc = Document::from_sections(&NovelSections::compose(&novel, &labels));

        assert_eq!(
            doc.blocks(),
            &[
                Block::heading(0, "T"),
                Block::spacer(),
                Block::heading(2, "Related Knowledge"),
                Block::paragraph("k1"),
                Block::paragraph("k2"),
                Block::spacer(),
                Block::heading(1, "Body Content"),
                Block::paragraph("l1"),
                Block::paragraph(""),
                Block::paragraph("l3"),
            ]
        );
    }
}
