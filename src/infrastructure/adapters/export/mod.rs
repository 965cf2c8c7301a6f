//! Export Adapters - 导出格式化器
//!
//! 每种导出格式一个 ExportFormatterPort 实现

mod docx_formatter;
mod json_formatter;
mod text_formatter;

use std::sync::Arc;

pub use docx_formatter::DocxFormatter;
pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;

use crate::application::ports::ExportFormatterPort;
use crate::domain::export::ExportLabels;

/// 全部支持格式的格式化器
pub fn default_formatters(labels: ExportLabels) -> Vec<Arc<dyn ExportFormatterPort>> {
    vec![
        Arc::new(TextFormatter::new(labels)),
        Arc::new(JsonFormatter::new()),
        Arc::new(DocxFormatter::new(labels)),
    ]
}
