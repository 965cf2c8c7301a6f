//! DOCX 导出
//!
//! 将结构化文档序列化为最小 Office Open XML 包:
//! - `[Content_Types].xml`
//! - `_rels/.rels`
//! - `word/document.xml`
//! - `word/styles.xml`
//! - `word/_rels/document.xml.rels`

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::application::ports::{ExportError, ExportFormatterPort};
use crate::domain::export::{Block, Document, ExportFormat, ExportLabels, NovelSections};
use crate::domain::novel::Novel;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/><w:rPr><w:sz w:val="22"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="240"/></w:pPr><w:rPr><w:sz w:val="56"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="480"/><w:outlineLvl w:val="0"/></w:pPr><w:rPr><w:b/><w:sz w:val="32"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="200"/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/></w:rPr></w:style></w:styles>"#;

const DOCUMENT_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_TAIL: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/><w:pgMar w:top="1440" w:right="1800" w:bottom="1440" w:left="1800" w:header="851" w:footer="992" w:gutter="0"/></w:sectPr></w:body></w:document>"#;

/// 转义 XML 文本，并丢弃 XML 1.0 不允许的控制字符与 U+FFFE、U+FFFF
fn escape_xml(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
}

fn style_id(level: u8) -> String {
    match level {
        0 => "Title".to_string(),
        n => format!("Heading{}", n),
    }
}

fn push_paragraph(out: &mut String, style: Option<&str>, text: &str) {
    if style.is_none() && text.is_empty() {
        out.push_str("<w:p/>");
        return;
    }

    out.push_str("<w:p>");
    if let Some(style) = style {
        out.push_str(r#"<w:pPr><w:pStyle w:val=""#);
        out.push_str(style);
        out.push_str(r#""/></w:pPr>"#);
    }
    if !text.is_empty() {
        out.push_str(r#"<w:r><w:t xml:space="preserve">"#);
        escape_xml(text, out);
        out.push_str("</w:t></w:r>");
    }
    out.push_str("</w:p>");
}

/// 生成 `word/document.xml`
pub fn document_xml(doc: &Document) -> String {
    let mut out = String::from(DOCUMENT_HEAD);
    for block in doc.blocks() {
        match block {
            Block::Heading { level, text } => {
                push_paragraph(&mut out, Some(&style_id(*level)), text)
            }
            Block::Paragraph(text) => push_paragraph(&mut out, None, text),
        }
    }
    out.push_str(DOCUMENT_TAIL);
    out
}

/// 打包为 DOCX 字节流
pub fn package_docx(doc: &Document) -> Result<Vec<u8>, ExportError> {
    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        ("word/document.xml", document_xml(doc)),
        ("word/styles.xml", STYLES_XML.to_string()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
    ];

    let zip_err =
        |e: zip::result::ZipError| ExportError::Encoding(format!("DOCX packaging failed: {}", e));
    let io_err =
        |e: std::io::Error| ExportError::Encoding(format!("DOCX packaging failed: {}", e));

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, body) in parts {
        writer.start_file(name, options).map_err(zip_err)?;
        writer.write_all(body.as_bytes()).map_err(io_err)?;
    }

    let cursor = writer.finish().map_err(zip_err)?;
    Ok(cursor.into_inner())
}

/// DOCX 格式化器
pub struct DocxFormatter {
    labels: ExportLabels,
}

impl DocxFormatter {
    pub fn new(labels: ExportLabels) -> Self {
        Self { labels }
    }

    pub fn build_document(&self, novel: &Novel) -> Document {
        Document::from_sections(&NovelSections::compose(novel, &self.labels))
    }
}

impl ExportFormatterPort for DocxFormatter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Docx
    }

    fn render(&self, novel: &Novel) -> Result<Vec<u8>, ExportError> {
        package_docx(&self.build_document(novel))
    }
}
