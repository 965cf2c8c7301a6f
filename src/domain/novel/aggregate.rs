//! Novel Context - Aggregate Root

use chrono::{DateTime, Utc};
use super::{NovelError, NovelId, NovelPatch, Title};

/// Novel 聚合根
///
/// 不变量:
/// - id 创建时分配，之后不可变
/// - 未提供的文本字段在构造时即为空串
/// - 仅通过 `apply` 做部分更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Novel {
    id: NovelId,
    title: String,
    content: String,
    characters: String,
    knowledge: String,
    prompt_library: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Novel {
    /// 创建新小说，笔记字段全部为空
    pub fn new(title: Title, content: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NovelId::new(),
            title: title.into_inner(),
            content: content.unwrap_or_default(),
            characters: String::new(),
            knowledge: String::new(),
            prompt_library: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 应用部分更新，只覆盖载荷中出现的字段
    pub fn apply(&mut self, patch: NovelPatch) -> Result<(), NovelError> {
        if patch.is_empty() {
            return Err(NovelError::EmptyPatch);
        }

        let NovelPatch {
            title,
            content,
            characters,
            knowledge,
            prompt_library,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        if let Some(characters) = characters {
            self.characters = characters;
        }
        if let Some(knowledge) = knowledge {
            self.knowledge = knowledge;
        }
        if let Some(prompt_library) = prompt_library {
            self.prompt_library = prompt_library;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &NovelId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn characters(&self) -> &str {
        &self.characters
    }

    pub fn knowledge(&self) -> &str {
        &self.knowledge
    }

    pub fn prompt_library(&self) -> &str {
        &self.prompt_library
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
