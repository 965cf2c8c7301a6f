//! Novel Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateNovel, DeleteNovel, UpdateNovel};
use crate::application::error::ApplicationError;
use crate::application::ports::NovelRepositoryPort;
use crate::domain::novel::{Novel, NovelError, NovelId, Title};

// ============================================================================
// CreateNovel
// ============================================================================

/// 创建小说响应
#[derive(Debug, Clone)]
pub struct CreateNovelResponse {
    pub id: NovelId,
    pub title: String,
}

/// CreateNovel Handler
pub struct CreateNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl CreateNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(
        &self,
        command: CreateNovel,
    ) -> Result<CreateNovelResponse, ApplicationError> {
        let title = command
            .title
            .ok_or_else(|| NovelError::InvalidTitle("Title is required".to_string()))
            .and_then(|t| Title::new(t).map_err(|e| NovelError::InvalidTitle(e.to_string())))?;

        let novel = Novel::new(title, command.content);
        let response = CreateNovelResponse {
            id: *novel.id(),
            title: novel.title().to_string(),
        };

        self.novel_repo.insert(novel).await?;

        tracing::info!(
            novel_id = %response.id,
            title = %response.title,
            "Novel created"
        );

        Ok(response)
    }
}

// ============================================================================
// UpdateNovel
// ============================================================================

/// UpdateNovel Handler
pub struct UpdateNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl UpdateNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    /// 先检查存在性，再检查载荷是否为空
    pub async fn handle(&self, command: UpdateNovel) -> Result<NovelId, ApplicationError> {
        let novel_id = command.novel_id;

        if self.novel_repo.find_by_id(&novel_id).await?.is_none() {
            return Err(NovelError::NotFound(novel_id).into());
        }
        if command.patch.is_empty() {
            return Err(NovelError::EmptyPatch.into());
        }

        let novel = self.novel_repo.update(&novel_id, command.patch).await?;

        tracing::info!(
            novel_id = %novel_id,
            title = %novel.title(),
            updated_at = %novel.updated_at(),
            "Novel updated"
        );

        Ok(novel_id)
    }
}

// ============================================================================
// DeleteNovel
// ============================================================================

/// 删除小说响应
#[derive(Debug, Clone)]
pub struct DeleteNovelResponse {
    pub id: NovelId,
    /// 删除时的标题
    pub title: String,
}

/// DeleteNovel Handler
pub struct DeleteNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl DeleteNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(
        &self,
        command: DeleteNovel,
    ) -> Result<DeleteNovelResponse, ApplicationError> {
        let novel_id = command.novel_id;

        let novel = self.novel_repo.delete(&novel_id).await.map_err(|e| {
            tracing::warn!(novel_id = %novel_id, "Attempted to delete non-existent novel");
            ApplicationError::from(e)
        })?;

        tracing::info!(
            novel_id = %novel_id,
            title = %novel.title(),
            "Novel deleted"
        );

        Ok(DeleteNovelResponse {
            id: novel_id,
            title: novel.title().to_string(),
        })
    }
}
