//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod export;
mod language_model;
mod repositories;

pub use export::{ExportError, ExportFormatterPort, ExportStoragePort};
pub use language_model::{GenerateRequest, GenerateResponse, LanguageModelPort, LlmError};
pub use repositories::{NovelRepositoryPort, RepositoryError};
