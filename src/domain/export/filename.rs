//! 导出文件名生成
//!
//! `{净化后的标题}_{YYYY-MM-DDTHH-MM-SS}.{扩展名}`

use chrono::{DateTime, Local, TimeZone};

use super::ExportFormat;

/// 标题净化后为空时使用的文件名
pub const FALLBACK_TITLE: &str = "Untitled";

/// 净化后标题的字节上限，给时间戳与扩展名留出余量，整体不超过 255 字节
pub const MAX_TITLE_BYTES: usize = 200;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

#[inline]
fn is_cjk_unified_ideograph(ch: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&ch)
}

/// 只保留字母数字与 CJK 统一表意文字，其余字符（空格、标点、路径分隔符）全部丢弃
///
/// 结果在字符边界上截断到 [`MAX_TITLE_BYTES`]
pub fn sanitize_title(title: &str) -> String {
    let mut sanitized = String::new();
    for ch in title
        .chars()
        .filter(|&ch| ch.is_alphanumeric() || is_cjk_unified_ideograph(ch))
    {
        if sanitized.len() + ch.len_utf8() > MAX_TITLE_BYTES {
            break;
        }
        sanitized.push(ch);
    }

    if sanitized.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        sanitized
    }
}

/// 使用给定时间戳生成文件名
pub fn export_filename_at<Tz>(title: &str, format: ExportFormat, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_{}.{}",
        sanitize_title(title),
        timestamp.format(TIMESTAMP_FORMAT),
        format.extension()
    )
}

/// 使用本地当前时间生成文件名
pub fn export_filename(title: &str, format: ExportFormat) -> String {
    export_filename_at(title, format, &Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap()
    }

    #[test]
    fn test_sanitize_keeps_alphanumeric_and_cjk() {
        assert_eq!(sanitize_title("秋水长天"), "秋水长天");
        assert_eq!(sanitize_title("My Novel: Part 2!"), "MyNovelPart2");
        assert_eq!(sanitize_title("../etc/passwd"), "etcpasswd");
    }

    #[test]
    fn test_sanitize_keeps_other_scripts() {
        assert_eq!(sanitize_title("Été à Paris"), "ÉtéàParis");
    }

    #[test]
    fn test_sanitize_falls_back() {
        assert_eq!(sanitize_title("!!!"), FALLBACK_TITLE);
        assert_eq!(sanitize_title(""), FALLBACK_TITLE);
        assert_eq!(sanitize_title("   "), FALLBACK_TITLE);
    }

    #[test]
    fn test_sanitize_caps_length_on_char_boundary() {
        let sanitized = sanitize_title(&"秋".repeat(100));
        assert!(sanitized.len() <= MAX_TITLE_BYTES);
        assert_eq!(sanitized, "秋".repeat(MAX_TITLE_BYTES / 3));

        let sanitized = sanitize_title(&"a".repeat(300));
        assert_eq!(sanitized.len(), MAX_TITLE_BYTES);
    }

    #[test]
    fn test_long_title_filename_fits_name_limit() {
        let name = export_filename_at(&"秋".repeat(100), ExportFormat::Docx, &fixed_time());
        assert!(name.len() <= 255, "{} bytes", name.len());
        assert!(name.ends_with("_2024-03-09T07-05-02.docx"));
    }

    #[test]
    fn test_filename_layout() {
        let name = export_filename_at("秋水 长天", ExportFormat::Text, &fixed_time());
        assert_eq!(name, "秋水长天_2024-03-09T07-05-02.txt");

        let name = export_filename_at("!!!", ExportFormat::Docx, &fixed_time());
        assert_eq!(name, "Untitled_2024-03-09T07-05-02.docx");
    }

    #[test]
    fn test_filename_is_deterministic() {
        let a = export_filename_at("a/b", ExportFormat::Json, &fixed_time());
        let b = export_filename_at("a/b", ExportFormat::Json, &fixed_time());
        assert_eq!(a, b);
        assert!(!a.contains('/'));
    }

    #[test]
    fn test_filename_now_has_extension() {
        let name = export_filename("Draft", ExportFormat::Json);
        assert!(name.starts_with("Draft_"));
        assert!(name.ends_with(".json"));
    }
}
