//! LLM Adapter - Ollama HTTP 客户端实现

mod fake_llm_client;
mod ollama_client;

pub use fake_llm_client::{FakeLanguageModel, FakeLanguageModelConfig};
pub use ollama_client::*;
