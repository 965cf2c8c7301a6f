//! 导出格式

use std::str::FromStr;
use thiserror::Error;

/// 不支持的导出格式
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid file format requested: {0}")]
pub struct UnsupportedFormat(pub String);

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// 纯文本
    Text,
    /// JSON
    Json,
    /// Word 文档（Office Open XML）
    Docx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Json, ExportFormat::Docx];

    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.extension()
    }
}

impl FromStr for ExportFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "docx" => Ok(ExportFormat::Docx),
            _ => Err(UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("docx".parse::<ExportFormat>().unwrap(), ExportFormat::Docx);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err, UnsupportedFormat("pdf".to_string()));
    }

    #[test]
    fn test_extension_round_trips_through_parse() {
        for format in ExportFormat::ALL {
            assert_eq!(format.extension().parse::<ExportFormat>().unwrap(), format);
        }
    }
}
