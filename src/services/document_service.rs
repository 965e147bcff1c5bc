use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const PPTX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

static SLIDE_PART_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ppt/slides/slide(\d+)\.xml$").expect("SLIDE_PART_REGEX is a valid regex pattern")
});

static TEXT_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<a:t(?:\s[^>]*)?>(.*?)</a:t>").expect("TEXT_RUN_REGEX is a valid regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    SlideDeck,
}

impl DocumentKind {
    /// Classifies an upload by MIME type; parameters such as `; charset=`
    /// are ignored.
    pub fn from_content_type(content_type: &str) -> AppResult<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            PDF_CONTENT_TYPE => Ok(DocumentKind::Pdf),
            PPTX_CONTENT_TYPE => Ok(DocumentKind::SlideDeck),
            _ => Err(AppError::UnsupportedFileType(if mime.is_empty() {
                "missing content type".to_string()
            } else {
                mime
            })),
        }
    }
}

/// An uploaded file as received: declared MIME type plus raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(content_type: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// Extracts plain text. CPU bound; run it off the async workers.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> AppResult<String> {
    if bytes.is_empty() {
        return Err(AppError::ValidationError("uploaded file is empty".to_string()));
    }

    match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::Document(format!("PDF text extraction failed: {e}"))),
        DocumentKind::SlideDeck => extract_slide_text(bytes),
    }
}

fn extract_slide_text(bytes: &[u8]) -> AppResult<String> {
    let document_error = |e: &dyn std::fmt::Display| AppError::Document(format!("invalid slide deck: {e}"));

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| document_error(&e))?;

    let mut slides: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = SLIDE_PART_REGEX.captures(name)?.get(1)?.as_str().parse().ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    let mut lines = Vec::new();
    for (_, name) in slides {
        let mut xml = String::new();
        archive
            .by_name(&name)
            .map_err(|e| document_error(&e))?
            .read_to_string(&mut xml)
            .map_err(|e| document_error(&e))?;
        lines.extend(slide_paragraphs(&xml));
    }

    Ok(lines.join("\n"))
}

/// One entry per non-empty `<a:p>` paragraph, runs concatenated.
fn slide_paragraphs(xml: &str) -> Vec<String> {
    xml.split("</a:p>")
        .map(|paragraph| {
            TEXT_RUN_REGEX
                .captures_iter(paragraph)
                .filter_map(|run| run.get(1))
                .map(|run| unescape_xml(run.as_str()))
                .collect::<String>()
        })
        .filter(|text| !text.trim().is_empty())
        .collect()
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
