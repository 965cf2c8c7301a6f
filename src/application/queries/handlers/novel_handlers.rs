//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::NovelRepositoryPort;
use crate::application::queries::{GetNovel, ListNovels};
use crate::domain::novel::{Novel, NovelError, NovelId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 小说列表项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovelSummary {
    pub id: NovelId,
    pub title: String,
}

impl From<&Novel> for NovelSummary {
    fn from(novel: &Novel) -> Self {
        Self {
            id: *novel.id(),
            title: novel.title().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetNovel Handler
pub struct GetNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl GetNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, query: GetNovel) -> Result<Novel, ApplicationError> {
        let novel = self
            .novel_repo
            .find_by_id(&query.novel_id)
            .await?
            .ok_or(NovelError::NotFound(query.novel_id))?;

        Ok(novel)
    }
}

/// ListNovels Handler
pub struct ListNovelsHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl ListNovelsHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, _query: ListNovels) -> Result<Vec<NovelSummary>, ApplicationError> {
        let novels = self.novel_repo.find_all().await?;
        Ok(novels.iter().map(NovelSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::novel::Title;
    use crate::infrastructure::memory::InMemoryNovelRepository;

    #[tokio::test]
    async fn test_get_missing_novel() {
        let handler = GetNovelHandler::new(Arc::new(InMemoryNovelRepository::new()));
        let result = handler
            .handle(GetNovel {
                novel_id: NovelId::new(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_covers_every_record() {
        let repo = Arc::new(InMemoryNovelRepository::new());
        for title in ["一", "二", "三"] {
            repo.insert(Novel::new(Title::new(title).unwrap(), None))
                .await
                .unwrap();
        }

        let list = ListNovelsHandler::new(repo).handle(ListNovels).await.unwrap();
        let titles: Vec<_> = list.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["一", "二", "三"]);
    }
}
