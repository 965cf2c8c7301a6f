//! Model Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::LanguageModelPort;
use crate::application::queries::ListModels;

/// ListModels Handler
pub struct ListModelsHandler {
    llm: Arc<dyn LanguageModelPort>,
}

impl ListModelsHandler {
    pub fn new(llm: Arc<dyn LanguageModelPort>) -> Self {
        Self { llm }
    }

    /// 原样返回服务报告的模型名，不做补全
    pub async fn handle(&self, _query: ListModels) -> Result<Vec<String>, ApplicationError> {
        self.llm.list_models().await.map_err(|e| {
            tracing::error!(endpoint = %self.llm.endpoint(), error = %e, "Failed to list models");
            if e.is_protocol() {
                ApplicationError::from(e)
            } else {
                ApplicationError::ExternalServiceError(format!(
                    "Could not connect to the model service or fetch models. Is it running and accessible at {}? ({})",
                    self.llm.endpoint(),
                    e
                ))
            }
        })
    }
}
