//! Fake LLM Client - 用于测试的模型客户端
//!
//! 不访问网络，返回固定模型列表与固定（或回显的）生成结果

use async_trait::async_trait;

use crate::application::ports::{GenerateRequest, GenerateResponse, LanguageModelPort, LlmError};

/// Fake 客户端配置
#[derive(Debug, Clone)]
pub struct FakeLanguageModelConfig {
    /// 固定返回的模型列表
    pub models: Vec<String>,
    /// 固定返回的生成文本，None 时回显 `[model] prompt`
    pub reply: Option<String>,
    /// 模拟服务不可达
    pub unavailable: bool,
}

impl Default for FakeLanguageModelConfig {
    fn default() -> Self {
        Self {
            models: vec!["fake-model".to_string()],
            reply: None,
            unavailable: false,
        }
    }
}

/// Fake Language Model
pub struct FakeLanguageModel {
    config: FakeLanguageModelConfig,
}

impl FakeLanguageModel {
    pub fn new(config: FakeLanguageModelConfig) -> Self {
        Self { config }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeLanguageModelConfig::default())
    }

    fn check_available(&self) -> Result<(), LlmError> {
        if self.config.unavailable {
            return Err(LlmError::NetworkError(format!(
                "Cannot connect to model service at {}: connection refused",
                self.endpoint()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl LanguageModelPort for FakeLanguageModel {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.check_available()?;

        tracing::debug!(
            model = %request.model,
            prompt_len = request.prompt.len(),
            "FakeLanguageModel: returning canned text"
        );

        let text = self
            .config
            .reply
            .clone()
            .unwrap_or_else(|| format!("[{}] {}", request.model, request.prompt));

        Ok(GenerateResponse { text })
    }

    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        self.check_available()?;
        Ok(self.config.models.clone())
    }

    async fn health_check(&self) -> bool {
        !self.config.unavailable
    }

    fn endpoint(&self) -> &str {
        "fake://model-service"
    }
}
