//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（NovelRepository、LanguageModel、ExportFormatter、ExportStorage）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Novel commands
    CreateNovel,
    DeleteNovel,
    UpdateNovel,
    // Export commands
    ExportNovel,
    // Generate commands
    GenerateText,
    // Handlers
    handlers::{
        CreateNovelHandler, CreateNovelResponse, DeleteNovelHandler, DeleteNovelResponse,
        ExportNovelHandler, ExportNovelResponse, GenerateTextHandler, GenerateTextResponse,
        UpdateNovelHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Export
    ExportError,
    ExportFormatterPort,
    ExportStoragePort,
    // Language model
    GenerateRequest,
    GenerateResponse,
    LanguageModelPort,
    LlmError,
    // Repositories
    NovelRepositoryPort,
    RepositoryError,
};

pub use queries::{
    // Novel queries
    GetNovel,
    ListNovels,
    // Model queries
    ListModels,
    // Handlers
    handlers::{GetNovelHandler, ListModelsHandler, ListNovelsHandler, NovelSummary},
};
