//! Export Ports - 出站端口
//!
//! 导出格式化器与导出文件存储的抽象接口

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::export::{ExportFormat, UnsupportedFormat};
use crate::domain::novel::Novel;

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// 导出格式化器
///
/// 每种格式一个实现，只读取小说，不做修改
pub trait ExportFormatterPort: Send + Sync {
    /// 该格式化器负责的格式
    fn format(&self) -> ExportFormat;

    /// 将小说编码为字节流
    fn render(&self, novel: &Novel) -> Result<Vec<u8>, ExportError>;
}

/// 导出文件存储
#[async_trait]
pub trait ExportStoragePort: Send + Sync {
    /// 导出目录
    fn export_dir(&self) -> &Path;

    /// 写入导出文件，返回文件路径
    async fn write(&self, filename: &str, data: &[u8]) -> Result<PathBuf, ExportError>;
}
