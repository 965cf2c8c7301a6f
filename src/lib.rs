//! Novelist - 小说写作辅助后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说记录与部分更新
//! - Export Context: 导出格式、文件名、段落组织与文档模型
//!
//! 应用层 (application/):
//! - Ports: 端口定义（NovelRepository, LanguageModel, ExportFormatter, ExportStorage）
//! - Commands: 创建 / 更新 / 删除 / 导出小说，文本生成
//! - Queries: 小说查询，模型列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 内存小说仓库
//! - Adapters: Ollama Client, 导出格式化器, 导出文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
