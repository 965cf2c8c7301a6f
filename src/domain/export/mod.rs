//! Export Context - 导出限界上下文
//!
//! 职责:
//! - 导出格式定义
//! - 导出文件名生成
//! - 章节组成策略（空的可选段落整体省略）
//! - 结构化文档模型（标题 / 段落）

mod document;
mod filename;
mod format;
mod labels;
mod sections;

pub use document::{Block, Document};
pub use filename::{export_filename, export_filename_at, sanitize_title, FALLBACK_TITLE};
pub use format::{ExportFormat, UnsupportedFormat};
pub use labels::{ExportLabels, ExportLanguage};
pub use sections::{NovelSections, Section};
