//! Ollama Client - 调用本地 Ollama 模型服务
//!
//! 实现 LanguageModelPort trait
//!
//! 外部 API:
//! GET  {base}/api/tags      Response: {"models": [{"name": "..."}]}
//! POST {base}/api/generate  Request: {"model", "prompt", "stream": false}
//!                           Response: {"response": "..."}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GenerateRequest, GenerateResponse, LanguageModelPort, LlmError};

/// 生成请求体 (JSON)
#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// 生成响应体，`response` 缺失时为空串
#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<OllamaModelTag>,
}

#[derive(Debug, Deserialize)]
struct OllamaModelTag {
    name: String,
}

/// 错误响应体
#[derive(Debug, Deserialize)]
struct OllamaErrorBody {
    error: String,
}

/// Ollama 客户端配置
#[derive(Debug, Clone)]
pub struct OllamaClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OllamaClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            timeout_secs: 300,
        }
    }
}

impl OllamaClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Ollama HTTP 客户端
pub struct OllamaClient {
    client: Client,
    config: OllamaClientConfig,
}

impl OllamaClient {
    /// 创建新的客户端
    pub fn new(mut config: OllamaClientConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url)
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.config.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout
        } else if e.is_connect() {
            LlmError::NetworkError(format!(
                "Cannot connect to model service at {}: {}",
                self.config.base_url, e
            ))
        } else {
            LlmError::NetworkError(e.to_string())
        }
    }

    /// 非 2xx 响应：尽量取出服务返回的 `error` 字段
    async fn service_error(response: reqwest::Response) -> LlmError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<OllamaErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        LlmError::ServiceError(format!("HTTP {}: {}", status, detail))
    }
}

#[async_trait]
impl LanguageModelPort for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let body = OllamaGenerateRequest {
            model: &request.model,
            prompt: &request.prompt,
            stream: false,
        };

        tracing::debug!(
            url = %self.generate_url(),
            model = %request.model,
            prompt_len = request.prompt.len(),
            "Sending generate request"
        );

        let response = self
            .client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let text = response
            .text()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to read body: {}", e)))?;
        let parsed: OllamaGenerateResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::InvalidResponse(format!("{}: {}", e, text)))?;

        tracing::info!(
            model = %request.model,
            response_len = parsed.response.len(),
            "Generation completed"
        );

        Ok(GenerateResponse {
            text: parsed.response,
        })
    }

    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let response = self
            .client
            .get(self.tags_url())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(Self::service_error(response).await);
        }

        let text = response
            .text()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to read body: {}", e)))?;
        let tags: OllamaTagsResponse = serde_json::from_str(&text)
            .map_err(|e| LlmError::InvalidResponse(format!("{}: {}", e, text)))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.config.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn endpoint(&self) -> &str {
        &self.config.base_url
    }
}
