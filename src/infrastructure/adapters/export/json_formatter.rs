//! JSON 导出
//!
//! 平铺对象，五个字段全部输出（空字段为空串），非 ASCII 字符原样保留，4 空格缩进

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::application::ports::{ExportError, ExportFormatterPort};
use crate::domain::export::ExportFormat;
use crate::domain::novel::Novel;

const INDENT: &[u8] = b"    ";

/// 导出文件中的 JSON 结构（字段顺序即输出顺序）
#[derive(Debug, Serialize)]
struct NovelJson<'a> {
    title: &'a str,
    characters: &'a str,
    content: &'a str,
    knowledge: &'a str,
    #[serde(rename = "promptLibrary")]
    prompt_library: &'a str,
}

impl<'a> From<&'a Novel> for NovelJson<'a> {
    fn from(novel: &'a Novel) -> Self {
        Self {
            title: novel.title(),
            characters: novel.characters(),
            content: novel.content(),
            knowledge: novel.knowledge(),
            prompt_library: novel.prompt_library(),
        }
    }
}

/// JSON 格式化器
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ExportFormatterPort for JsonFormatter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, novel: &Novel) -> Result<Vec<u8>, ExportError> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        NovelJson::from(novel)
            .serialize(&mut serializer)
            .map_err(|e| ExportError::Encoding(e.to_string()))?;
        Ok(buf)
    }
}
