//! Novel Commands

use crate::domain::novel::{NovelId, NovelPatch};

/// 创建小说命令
#[derive(Debug, Clone)]
pub struct CreateNovel {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// 部分更新小说命令
#[derive(Debug, Clone)]
pub struct UpdateNovel {
    pub novel_id: NovelId,
    pub patch: NovelPatch,
}

/// 删除小说命令
#[derive(Debug, Clone)]
pub struct DeleteNovel {
    pub novel_id: NovelId,
}
