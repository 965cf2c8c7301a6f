//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Novel Context: 小说管理
//! - Export Context: 多格式导出

pub mod export;
pub mod novel;
