//! Model Queries

/// 列出模型服务可用模型
#[derive(Debug, Clone)]
pub struct ListModels;
