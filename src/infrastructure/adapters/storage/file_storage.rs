//! File Storage - 文件系统导出存储实现
//!
//! 实现 ExportStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{ExportError, ExportStoragePort};

/// 文件系统导出存储
pub struct FileExportStorage {
    /// 导出目录
    base_dir: PathBuf,
}

impl FileExportStorage {
    /// 创建新的文件存储，目录不存在时创建
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, ExportError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| ExportError::IoError(format!("{}: {}", base_dir.display(), e)))?;

        Ok(Self { base_dir })
    }
}

#[async_trait]
impl ExportStoragePort for FileExportStorage {
    fn export_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn write(&self, filename: &str, data: &[u8]) -> Result<PathBuf, ExportError> {
        let path = self.base_dir.join(filename);

        // 目录只在启动时创建，运行中被删除视为存储故障
        fs::write(&path, data)
            .await
            .map_err(|e| ExportError::IoError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved export: path={}, size={} bytes", path.display(), data.len());

        Ok(path)
    }
}
