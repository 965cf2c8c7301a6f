//! Novel HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteNovel, GetNovel, ListNovels, UpdateNovel};
use crate::domain::novel::NovelId;
use crate::infrastructure::http::dto::{
    CreateNovelRequest, MessageResponse, NovelResponse, NovelSummaryResponse, UpdateNovelRequest,
    UpdateNovelResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析路径中的小说 ID，格式不合法等同于不存在
pub(crate) fn parse_novel_id(raw: &str) -> Result<NovelId, ApiError> {
    NovelId::parse(raw).ok_or_else(ApiError::novel_not_found)
}

/// 列出所有小说（按创建顺序）
pub async fn list_novels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NovelSummaryResponse>>, ApiError> {
    let novels = state.list_novels_handler.handle(ListNovels).await?;
    Ok(Json(novels.into_iter().map(Into::into).collect()))
}

/// 创建小说
pub async fn create_novel(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateNovelRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NovelSummaryResponse>), ApiError> {
    let request = payload.map(|Json(req)| req).unwrap_or_default();

    let created = state.create_novel_handler.handle(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(NovelSummaryResponse {
            id: created.id.to_string(),
            title: created.title,
        }),
    ))
}

/// 获取完整记录
pub async fn get_novel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NovelResponse>, ApiError> {
    let novel_id = parse_novel_id(&id)?;
    let novel = state.get_novel_handler.handle(GetNovel { novel_id }).await?;
    Ok(Json(novel.into()))
}

/// 部分更新
///
/// 请求体无法解析时视为空补丁：先判断记录是否存在，再报告无更新数据
pub async fn update_novel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNovelRequest>, JsonRejection>,
) -> Result<Json<UpdateNovelResponse>, ApiError> {
    let novel_id = parse_novel_id(&id)?;
    let request = payload.map(|Json(req)| req).unwrap_or_default();

    let id = state
        .update_novel_handler
        .handle(UpdateNovel {
            novel_id,
            patch: request.into(),
        })
        .await?;

    Ok(Json(UpdateNovelResponse {
        message: "Novel updated successfully".to_string(),
        id: id.to_string(),
    }))
}

/// 删除小说
pub async fn delete_novel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let novel_id = parse_novel_id(&id)?;
    let deleted = state.delete_novel_handler.handle(DeleteNovel { novel_id }).await?;

    Ok(Json(MessageResponse {
        message: format!("Novel '{}' deleted successfully", deleted.title),
    }))
}
