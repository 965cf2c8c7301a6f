//! Language Model Port - 文本生成服务抽象
//!
//! 定义文本生成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 模型服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    /// 是否属于协议错误（响应无法解析）
    pub fn is_protocol(&self) -> bool {
        matches!(self, LlmError::InvalidResponse(_))
    }
}

/// 文本生成请求（仅支持非流式）
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
}

/// 文本生成响应
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    /// 生成的文本，服务未返回该字段时为空串
    pub text: String,
}

/// Language Model Port
///
/// 外部模型服务的抽象接口
#[async_trait]
pub trait LanguageModelPort: Send + Sync {
    /// 同步生成文本，等待完整响应
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError>;

    /// 列出服务端可用模型
    async fn list_models(&self) -> Result<Vec<String>, LlmError>;

    /// 检查模型服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }

    /// 服务地址（用于错误提示）
    fn endpoint(&self) -> &str;
}
