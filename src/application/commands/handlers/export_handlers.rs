//! Export Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::ExportNovel;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ExportError, ExportFormatterPort, ExportStoragePort, NovelRepositoryPort,
};
use crate::domain::export::{export_filename, ExportFormat};
use crate::domain::novel::{NovelError, NovelId};

/// 导出响应
#[derive(Debug, Clone)]
pub struct ExportNovelResponse {
    pub novel_id: NovelId,
    pub format: ExportFormat,
    pub filename: String,
    /// 写入后的文件路径
    pub path: PathBuf,
    pub size_bytes: usize,
}

/// ExportNovel Handler
///
/// 读取 → 复制 → 编码 → 写盘，格式化器不会修改存储中的记录
pub struct ExportNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
    formatters: Vec<Arc<dyn ExportFormatterPort>>,
    storage: Arc<dyn ExportStoragePort>,
}

impl ExportNovelHandler {
    pub fn new(
        novel_repo: Arc<dyn NovelRepositoryPort>,
        formatters: Vec<Arc<dyn ExportFormatterPort>>,
        storage: Arc<dyn ExportStoragePort>,
    ) -> Self {
        Self {
            novel_repo,
            formatters,
            storage,
        }
    }

    fn formatter(&self, format: ExportFormat) -> Option<&Arc<dyn ExportFormatterPort>> {
        self.formatters.iter().find(|f| f.format() == format)
    }

    pub async fn handle(
        &self,
        command: ExportNovel,
    ) -> Result<ExportNovelResponse, ApplicationError> {
        let novel_id = command.novel_id;

        let novel = self
            .novel_repo
            .find_by_id(&novel_id)
            .await?
            .ok_or(NovelError::NotFound(novel_id))?;

        let format = command
            .format
            .parse::<ExportFormat>()
            .map_err(ExportError::from)?;

        let formatter = self
            .formatter(format)
            .ok_or_else(|| {
                ApplicationError::internal(format!("No formatter configured for {}", format))
            })?;

        let data = formatter.render(&novel)?;
        let filename = export_filename(novel.title(), format);
        let path = self.storage.write(&filename, &data).await.map_err(|e| {
            tracing::error!(
                novel_id = %novel_id,
                format = %format,
                error = %e,
                "Export write failed"
            );
            ApplicationError::from(e)
        })?;

        tracing::info!(
            novel_id = %novel_id,
            title = %novel.title(),
            format = %format,
            path = %path.display(),
            size = data.len(),
            "Novel exported"
        );

        Ok(ExportNovelResponse {
            novel_id,
            format,
            filename,
            path,
            size_bytes: data.len(),
        })
    }
}
