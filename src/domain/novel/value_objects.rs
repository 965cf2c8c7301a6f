//! Novel Context - Value Objects

use uuid::Uuid;

/// 小说唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NovelId(Uuid);

impl NovelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析路径参数中的 ID
    ///
    /// 只接受与 `Display` 输出一致的小写连字符形式，
    /// 同一记录不会被花括号、大写、无连字符或 `urn:uuid:` 等写法重复命中
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::try_parse(s)
            .ok()
            .filter(|uuid| uuid.hyphenated().to_string() == s)
            .map(Self)
    }
}

impl Default for NovelId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NovelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 小说标题（仅在创建时校验非空）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, &'static str> {
        let title = title.into();
        if title.is_empty() {
            return Err("Title is required");
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 部分更新载荷
///
/// 每个字段为 `Some` 时覆盖对应字段，`None` 时保持不变。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NovelPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub characters: Option<String>,
    pub knowledge: Option<String>,
    pub prompt_library: Option<String>,
}

impl NovelPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.characters.is_none()
            && self.knowledge.is_none()
            && self.prompt_library.is_none()
    }
}
