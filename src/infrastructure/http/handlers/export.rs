//! Export HTTP Handler

use axum::{
    extract::{Path, State},
    Json,
};
use std::path::Path as FsPath;
use std::sync::Arc;

use super::novel::parse_novel_id;
use crate::application::ExportNovel;
use crate::infrastructure::http::dto::ExportResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 相对于进程工作目录的路径，不在其下时原样返回
fn display_path(path: &FsPath) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(FsPath::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// 导出小说到服务端导出目录
pub async fn export_novel(
    State(state): State<Arc<AppState>>,
    Path((id, format)): Path<(String, String)>,
) -> Result<Json<ExportResponse>, ApiError> {
    let novel_id = parse_novel_id(&id)?;

    let exported = state
        .export_novel_handler
        .handle(ExportNovel { novel_id, format })
        .await?;

    let filepath = display_path(&exported.path);

    Ok(Json(ExportResponse {
        message: format!("Novel exported to {}", filepath),
        filepath,
    }))
}
