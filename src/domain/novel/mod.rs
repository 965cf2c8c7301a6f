//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说聚合管理（标题、正文、角色设定、关联知识、提示词库）
//! - 部分更新语义

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Novel;
pub use errors::NovelError;
pub use value_objects::{NovelId, NovelPatch, Title};
