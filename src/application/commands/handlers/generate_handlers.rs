//! Generate Command Handlers

use std::sync::Arc;

use crate::application::commands::GenerateText;
use crate::application::error::ApplicationError;
use crate::application::ports::{GenerateRequest, LanguageModelPort};

/// 文本生成响应
#[derive(Debug, Clone)]
pub struct GenerateTextResponse {
    pub generated_text: String,
}

/// GenerateText Handler - 转发到外部模型服务
pub struct GenerateTextHandler {
    llm: Arc<dyn LanguageModelPort>,
}

impl GenerateTextHandler {
    pub fn new(llm: Arc<dyn LanguageModelPort>) -> Self {
        Self { llm }
    }

    pub async fn handle(
        &self,
        command: GenerateText,
    ) -> Result<GenerateTextResponse, ApplicationError> {
        let (model, prompt) = match (command.model, command.prompt) {
            (Some(model), Some(prompt)) if !model.is_empty() && !prompt.is_empty() => {
                (model, prompt)
            }
            _ => {
                return Err(ApplicationError::validation(
                    "Missing required fields: model and prompt",
                ))
            }
        };

        // 流式生成未实现，在访问模型服务之前直接拒绝
        if command.stream {
            return Err(ApplicationError::NotImplemented(
                "Streaming not yet implemented in this backend".to_string(),
            ));
        }

        tracing::debug!(model = %model, prompt_len = prompt.len(), "Forwarding generation request");

        let response = self
            .llm
            .generate(GenerateRequest {
                model: model.clone(),
                prompt,
            })
            .await
            .map_err(|e| {
                tracing::error!(model = %model, error = %e, "Generation failed");
                if e.is_protocol() {
                    ApplicationError::ProtocolError(format!(
                        "Invalid response format from model service: {}",
                        e
                    ))
                } else {
                    ApplicationError::ExternalServiceError(format!(
                        "Failed to generate text via {}. {}",
                        self.llm.endpoint(),
                        e
                    ))
                }
            })?;

        Ok(GenerateTextResponse {
            generated_text: response.text,
        })
    }
}
