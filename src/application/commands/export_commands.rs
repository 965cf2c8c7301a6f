//! Export Commands

use crate::domain::novel::NovelId;

/// 导出小说命令
///
/// `format` 为原始格式名，由处理器解析
#[derive(Debug, Clone)]
pub struct ExportNovel {
    pub novel_id: NovelId,
    pub format: String,
}
