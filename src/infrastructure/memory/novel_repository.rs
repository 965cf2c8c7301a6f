//! In-Memory Novel Repository Implementation

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::application::ports::{NovelRepositoryPort, RepositoryError};
use crate::domain::novel::{Novel, NovelId, NovelPatch};

/// 存储条目：插入序号用于稳定的列表顺序
#[derive(Debug, Clone)]
struct StoredNovel {
    seq: u64,
    novel: Novel,
}

/// 内存小说仓储
///
/// 进程退出即丢失，无淘汰策略
pub struct InMemoryNovelRepository {
    novels: DashMap<NovelId, StoredNovel>,
    next_seq: AtomicU64,
}

impl InMemoryNovelRepository {
    pub fn new() -> Self {
        Self {
            novels: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryNovelRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NovelRepositoryPort for InMemoryNovelRepository {
    async fn insert(&self, novel: Novel) -> Result<(), RepositoryError> {
        let id = *novel.id();
        match self.novels.entry(id) {
            Entry::Occupied(_) => Err(RepositoryError::Duplicate(id)),
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredNovel { seq, novel });
                tracing::debug!(novel_id = %id, seq = seq, "Novel stored");
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &NovelId) -> Result<Option<Novel>, RepositoryError> {
        Ok(self.novels.get(id).map(|e| e.novel.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Novel>, RepositoryError> {
        let mut entries: Vec<StoredNovel> = self.novels.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| e.seq);
        Ok(entries.into_iter().map(|e| e.novel).collect())
    }

    async fn update(&self, id: &NovelId, patch: NovelPatch) -> Result<Novel, RepositoryError> {
        let mut entry = self
            .novels
            .get_mut(id)
            .ok_or(RepositoryError::NotFound(*id))?;
        entry.novel.apply(patch)?;
        Ok(entry.novel.clone())
    }

    async fn delete(&self, id: &NovelId) -> Result<Novel, RepositoryError> {
        self.novels
            .remove(id)
            .map(|(_, entry)| entry.novel)
            .ok_or(RepositoryError::NotFound(*id))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.novels.len())
    }
}
