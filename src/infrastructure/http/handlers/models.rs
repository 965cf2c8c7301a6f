//! Model HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListModels;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出模型服务上可用的模型名
pub async fn list_models(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let models = state.list_models_handler.handle(ListModels).await?;
    Ok(Json(models))
}
