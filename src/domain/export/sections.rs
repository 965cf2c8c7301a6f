//! 段落组成策略
//!
//! 所有导出格式共享同一规则:
//! 1. 标题始终存在
//! 2. 角色设定 → 关联知识 → 提示词库，字段为空时整段省略
//! 3. 正文段落始终存在（即使正文为空）

use super::ExportLabels;
use crate::domain::novel::Novel;

/// 带标题的文本段落
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub heading: &'a str,
    pub text: &'a str,
}

impl<'a> Section<'a> {
    /// 按行拆分，保留空行；行尾的 `\r` 会被去掉
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

/// 一部小说在导出时的段落视图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelSections<'a> {
    pub title: &'a str,
    pub notes: Vec<Section<'a>>,
    pub body: Section<'a>,
}

impl<'a> NovelSections<'a> {
    pub fn compose(novel: &'a Novel, labels: &'a ExportLabels) -> Self {
        let notes = [
            (labels.characters, novel.characters()),
            (labels.knowledge, novel.knowledge()),
            (labels.prompt_library, novel.prompt_library()),
        ]
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(heading, text)| Section { heading, text })
        .collect();

        Self {
            title: novel.title(),
            notes,
            body: Section {
                heading: labels.content,
                text: novel.content(),
            },
        }
    }
}
