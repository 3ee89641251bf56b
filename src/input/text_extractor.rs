//! Text extraction from various file formats

use crate::error::{Result, ScreenerError};
use log::{debug, warn};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

/// Below this many characters a document is treated as unreadable.
pub const MIN_TEXT_CHARS: usize = 50;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ScreenerError::Io)?;
        Self::extract_from_bytes(&bytes).map_err(|e| match e {
            ScreenerError::PdfExtraction(msg) => {
                ScreenerError::PdfExtraction(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl PdfExtractor {
    /// Rebuild the text layer page by page. Pages that fail to decode are
    /// skipped. When the page tree itself cannot be read the whole-document
    /// extractor gets a second attempt.
    pub fn extract_from_bytes(bytes: &[u8]) -> Result<String> {
        match lopdf::Document::load_mem(bytes) {
            Ok(doc) => {
                let pages = doc
                    .get_pages()
                    .into_keys()
                    .map(|page_num| (page_num, doc.extract_text(&[page_num])));
                let text = join_pages(pages);

                if text.trim().is_empty() {
                    debug!("No text from page-wise extraction, retrying whole document");
                    Self::extract_whole(bytes)
                } else {
                    Ok(text)
                }
            }
            Err(e) => {
                debug!("Page-wise PDF load failed ({}), retrying whole document", e);
                Self::extract_whole(bytes)
            }
        }
    }

    fn extract_whole(bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ScreenerError::PdfExtraction(format!("Failed to extract text from PDF: {}", e)))
    }
}

/// Join page texts in page order, one page per line block. Pages that failed
/// to decode are logged and left out.
fn join_pages<I, E>(pages: I) -> String
where
    I: IntoIterator<Item = (u32, std::result::Result<String, E>)>,
    E: std::fmt::Display,
{
    let mut text = String::new();
    for (page_num, page) in pages {
        match page {
            Ok(page_text) => {
                text.push_str(page_text.trim_end());
                text.push('\n');
            }
            Err(e) => warn!("Skipping unreadable PDF page {}: {}", page_num, e),
        }
    }
    text
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ScreenerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await.map_err(ScreenerError::Io)?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Drop markup and keep one logical line per block element.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut output = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(text) | Event::Code(text) => output.push_str(&text),
                Event::SoftBreak | Event::HardBreak => output.push('\n'),
                Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                    output.push('\n')
                }
                _ => {}
            }
        }

        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trim extracted text and reject it when it is too short to analyze.
pub fn ensure_usable_text(text: &str, min_chars: usize, source: &str) -> Result<String> {
    let trimmed = text.trim();
    let length = trimmed.chars().count();

    if length < min_chars {
        return Err(ScreenerError::ExtractionFailed(format!(
            "{} yielded {} characters of text (minimum {})",
            source, length, min_chars
        )));
    }

    Ok(trimmed.to_string())
}
