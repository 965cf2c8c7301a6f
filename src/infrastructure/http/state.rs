//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateNovelHandler, DeleteNovelHandler, ExportNovelHandler, GenerateTextHandler,
    UpdateNovelHandler,
    // Query handlers
    GetNovelHandler, ListModelsHandler, ListNovelsHandler,
    // Ports
    ExportFormatterPort, ExportStoragePort, LanguageModelPort, NovelRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_novel_handler: CreateNovelHandler,
    pub update_novel_handler: UpdateNovelHandler,
    pub delete_novel_handler: DeleteNovelHandler,
    pub export_novel_handler: ExportNovelHandler,
    pub generate_text_handler: GenerateTextHandler,

    // ========== Query Handlers ==========
    pub get_novel_handler: GetNovelHandler,
    pub list_novels_handler: ListNovelsHandler,
    pub list_models_handler: ListModelsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        novel_repo: Arc<dyn NovelRepositoryPort>,
        llm: Arc<dyn LanguageModelPort>,
        formatters: Vec<Arc<dyn ExportFormatterPort>>,
        export_storage: Arc<dyn ExportStoragePort>,
    ) -> Self {
        Self {
            // Command handlers
            create_novel_handler: CreateNovelHandler::new(novel_repo.clone()),
            update_novel_handler: UpdateNovelHandler::new(novel_repo.clone()),
            delete_novel_handler: DeleteNovelHandler::new(novel_repo.clone()),
            export_novel_handler: ExportNovelHandler::new(
                novel_repo.clone(),
                formatters,
                export_storage,
            ),
            generate_text_handler: GenerateTextHandler::new(llm.clone()),

            // Query handlers
            get_novel_handler: GetNovelHandler::new(novel_repo.clone()),
            list_novels_handler: ListNovelsHandler::new(novel_repo),
            list_models_handler: ListModelsHandler::new(llm),
        }
    }
}
