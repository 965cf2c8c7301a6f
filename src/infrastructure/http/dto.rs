//! Data Transfer Objects
//!
//! 请求体字段全部可选，缺失与否由应用层校验

use serde::{Deserialize, Serialize};

use crate::application::{CreateNovel, GenerateText, NovelSummary};
use crate::domain::novel::{Novel, NovelPatch};

// ============================================================================
// Novel DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateNovelRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<CreateNovelRequest> for CreateNovel {
    fn from(req: CreateNovelRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

/// 更新请求，只有出现的字段会被修改
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNovelRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub characters: Option<String>,
    pub knowledge: Option<String>,
    #[serde(rename = "promptLibrary", alias = "prompt_library")]
    pub prompt_library: Option<String>,
}

impl From<UpdateNovelRequest> for NovelPatch {
    fn from(req: UpdateNovelRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            characters: req.characters,
            knowledge: req.knowledge,
            prompt_library: req.prompt_library,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NovelSummaryResponse {
    pub id: String,
    pub title: String,
}

impl From<NovelSummary> for NovelSummaryResponse {
    fn from(summary: NovelSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title,
        }
    }
}

/// 完整记录
#[derive(Debug, Serialize)]
pub struct NovelResponse {
    pub id: String,
    pub title: String,
    pub characters: String,
    pub content: String,
    pub knowledge: String,
    #[serde(rename = "promptLibrary")]
    pub prompt_library: String,
}

impl From<Novel> for NovelResponse {
    fn from(novel: Novel) -> Self {
        Self {
            id: novel.id().to_string(),
            title: novel.title().to_string(),
            characters: novel.characters().to_string(),
            content: novel.content().to_string(),
            knowledge: novel.knowledge().to_string(),
            prompt_library: novel.prompt_library().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateNovelResponse {
    pub message: String,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub message: String,
    pub filepath: String,
}

// ============================================================================
// Generate DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct GenerateTextRequest {
    pub model: Option<String>,
    pub prompt: Option<String>,
    pub stream: Option<bool>,
}

impl From<GenerateTextRequest> for GenerateText {
    fn from(req: GenerateTextRequest) -> Self {
        Self {
            model: req.model,
            prompt: req.prompt,
            stream: req.stream.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateTextResponseBody {
    #[serde(rename = "generatedText")]
    pub generated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_accepts_both_prompt_library_spellings() {
        let camel: UpdateNovelRequest =
            serde_json::from_value(json!({"promptLibrary": "a"})).unwrap();
        let snake: UpdateNovelRequest =
            serde_json::from_value(json!({"prompt_library": "b"})).unwrap();

        assert_eq!(NovelPatch::from(camel).prompt_library.as_deref(), Some("a"));
        assert_eq!(NovelPatch::from(snake).prompt_library.as_deref(), Some("b"));
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let req: UpdateNovelRequest = serde_json::from_value(json!({"foo": 1})).unwrap();
        assert!(NovelPatch::from(req).is_empty());
    }

    #[test]
    fn test_generate_stream_defaults_false() {
        let req: GenerateTextRequest =
            serde_json::from_value(json!({"model": "m", "prompt": "p"})).unwrap();
        let command = GenerateText::from(req);
        assert!(!command.stream);
        assert_eq!(command.model.as_deref(), Some("m"));
    }

    #[test]
    fn test_generate_response_key() {
        let body = GenerateTextResponseBody {
            generated_text: "x".to_string(),
        };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"generatedText": "x"}));
    }
}
