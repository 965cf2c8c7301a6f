//! Generate HTTP Handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{GenerateTextRequest, GenerateTextResponseBody};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 转发生成请求；无法解析的请求体按缺少字段处理
pub async fn generate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateTextRequest>, JsonRejection>,
) -> Result<Json<GenerateTextResponseBody>, ApiError> {
    let request = payload.map(|Json(req)| req).unwrap_or_default();

    let response = state.generate_text_handler.handle(request.into()).await?;

    Ok(Json(GenerateTextResponseBody {
        generated_text: response.generated_text,
    }))
}
