//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{ExportError, LlmError, RepositoryError};
use crate::domain::novel::{NovelError, NovelId};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("{0}")]
    ValidationError(String),

    /// 不支持的导出格式
    #[error("Invalid file format requested: {0}")]
    UnsupportedFormat(String),

    /// 外部服务错误（不可达或返回非成功状态）
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 外部服务响应无法解析
    #[error("Protocol error: {0}")]
    ProtocolError(String),

    /// 存储错误（导出写盘失败）
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 未实现
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// 小说未找到
    pub fn novel_not_found(id: &NovelId) -> Self {
        Self::not_found("Novel", id)
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<NovelError> for ApplicationError {
    fn from(err: NovelError) -> Self {
        match err {
            NovelError::NotFound(id) => Self::novel_not_found(&id),
            NovelError::InvalidTitle(msg) => Self::ValidationError(msg),
            NovelError::EmptyPatch => Self::ValidationError(err.to_string()),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::novel_not_found(&id),
            RepositoryError::Rejected(e) => e.into(),
            RepositoryError::Duplicate(_) => Self::InternalError(err.to_string()),
        }
    }
}

impl From<LlmError> for ApplicationError {
    fn from(err: LlmError) -> Self {
        if err.is_protocol() {
            Self::ProtocolError(err.to_string())
        } else {
            Self::ExternalServiceError(err.to_string())
        }
    }
}

impl From<ExportError> for ApplicationError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnsupportedFormat(e) => Self::UnsupportedFormat(e.0),
            ExportError::Encoding(msg) => Self::InternalError(msg),
            ExportError::IoError(msg) => Self::StorageError(msg),
        }
    }
}
