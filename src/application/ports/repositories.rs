//! Repository Ports - 出站端口
//!
//! 定义小说存储的抽象接口
//! 具体实现在 infrastructure 层（内存实现）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::novel::{Novel, NovelError, NovelId, NovelPatch};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(NovelId),

    #[error("Duplicate entity: {0}")]
    Duplicate(NovelId),

    #[error("Rejected update: {0}")]
    Rejected(#[from] NovelError),
}

/// Novel Repository Port
///
/// 每个方法相对于单个 key 是原子的
#[async_trait]
pub trait NovelRepositoryPort: Send + Sync {
    /// 保存新小说，ID 已存在时返回 Duplicate
    async fn insert(&self, novel: Novel) -> Result<(), RepositoryError>;

    /// 根据 ID 查找小说（返回副本）
    async fn find_by_id(&self, id: &NovelId) -> Result<Option<Novel>, RepositoryError>;

    /// 获取所有小说，按创建顺序
    async fn find_all(&self) -> Result<Vec<Novel>, RepositoryError>;

    /// 原地应用部分更新，返回更新后的副本
    async fn update(&self, id: &NovelId, patch: NovelPatch) -> Result<Novel, RepositoryError>;

    /// 删除小说，返回被删除的记录
    async fn delete(&self, id: &NovelId) -> Result<Novel, RepositoryError>;

    /// 小说数量
    async fn count(&self) -> Result<usize, RepositoryError>;
}
