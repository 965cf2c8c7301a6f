//! 纯文本导出

use crate::application::ports::{ExportError, ExportFormatterPort};
use crate::domain::export::{ExportFormat, ExportLabels, NovelSections};
use crate::domain::novel::Novel;

/// 纯文本格式化器
///
/// ```text
/// 标题: {title}
///
/// 角色设定:
/// {characters}
///
/// 正文内容:
/// {content}
/// ```
pub struct TextFormatter {
    labels: ExportLabels,
}

impl TextFormatter {
    pub fn new(labels: ExportLabels) -> Self {
        Self { labels }
    }

    pub fn render_string(&self, novel: &Novel) -> String {
        let sections = NovelSections::compose(novel, &self.labels);
        let mut out = String::new();

        out.push_str(&format!("{}: {}\n\n", self.labels.title, sections.title));
        for section in &sections.notes {
            out.push_str(&format!("{}:\n{}\n\n", section.heading, section.text));
        }
        out.push_str(&format!("{}:\n{}", sections.body.heading, sections.body.text));

        out
    }
}

impl ExportFormatterPort for TextFormatter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn render(&self, novel: &Novel) -> Result<Vec<u8>, ExportError> {
        Ok(self.render_string(novel).into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::{NovelPatch, Title};

    #[test]
    fn test_minimal_novel() {
        let novel = Novel::new(Title::new("秋水长天").unwrap(), Some("第一章...".to_string()));
        let text = TextFormatter::new(ExportLabels::zh()).render_string(&novel);

        assert_eq!(text, "标题: 秋水长天\n\n正文内容:\n第一章...");
    }

    #[test]
    fn test_body_heading_present_when_empty() {
        let novel = Novel::new(Title::new("空").unwrap(), None);
        let text = TextFormatter::new(ExportLabels::en()).render_string(&novel);

        assert_eq!(text, "Title: 空\n\nBody Content:\n");
        assert!(!text.contains("Character Settings"));
        assert!(!text.contains("Related Knowledge"));
        assert!(!text.contains("Prompt Library"));
    }

    #[test]
    fn test_all_sections() {
        let mut novel = Novel::new(Title::new("T").unwrap(), Some("body".to_string()));
        novel
            .apply(NovelPatch {
                characters: Some("c1\nc2".to_string()),
                knowledge: Some("k".to_string()),
                prompt_library: Some("p".to_string()),
                ..Default::default()
            })
            .unwrap();
        let text = TextFormatter::new(ExportLabels::zh()).render_string(&novel);

        assert_eq!(
            text,
            "标题: T\n\n角色设定:\nc1\nc2\n\n关联知识:\nk\n\n提示词库:\np\n\n正文内容:\nbody"
        );
    }

    #[test]
    fn test_render_is_utf8_bytes() {
        let novel = Novel::new(Title::new("秋").unwrap(), None);
        let formatter = TextFormatter::new(ExportLabels::zh());
        let bytes = formatter.render(&novel).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), formatter.render_string(&novel));
        assert_eq!(formatter.format(), ExportFormat::Text);
    }
}
