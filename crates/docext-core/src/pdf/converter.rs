//! PDF conversion using lopdf and pdf-extract.

use std::path::Path;

use lopdf::Document;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tables::{detect_tables, TableData};
use super::Result;
use crate::error::PdfError;

/// Converts PDF files into text, pages, and best-effort table structure.
///
/// Stateless and cheap to share: the service constructs one instance at
/// startup and keeps it behind an `Arc` for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct DocumentConverter;

/// Result of converting a single PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertedDocument {
    /// Per-page content, 1-indexed.
    pub pages: Vec<PageContent>,
    /// Tables recovered from the extracted text.
    pub tables: Vec<TableData>,
    /// Full extracted text.
    pub text: String,
    /// Number of pages in the document.
    pub page_count: u32,
}

/// Content of a single page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    /// Page number (1-indexed).
    pub number: u32,
    /// Text attributed to this page.
    pub text: String,
}

impl DocumentConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self
    }

    /// Convert a PDF file on disk.
    pub fn convert(&self, path: &Path) -> Result<ConvertedDocument> {
        let data = std::fs::read(path).map_err(|e| PdfError::Parse(e.to_string()))?;
        self.convert_bytes(&data)
    }

    /// Convert a PDF held in memory.
    pub fn convert_bytes(&self, data: &[u8]) -> Result<ConvertedDocument> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // PDFs encrypted with an empty password can still be read.
        let raw_data = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("decrypted PDF with empty password");
            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len() as u32;
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        let text = pdf_extract::extract_text_from_mem(&raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

        let pages = split_pages(&text, page_count);
        let tables = detect_tables(&text);

        debug!(
            "converted PDF: {} pages, {} chars, {} tables",
            page_count,
            text.len(),
            tables.len()
        );

        Ok(ConvertedDocument {
            pages,
            tables,
            text,
            page_count,
        })
    }
}

impl ConvertedDocument {
    /// Render the document as Markdown: page texts separated by horizontal
    /// rules, detected tables appended as pipe tables.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                out.push_str("\n\n---\n\n");
            }
            out.push_str(page.text.trim_end());
        }

        for table in &self.tables {
            out.push_str("\n\n");
            out.push_str(&table.to_markdown());
        }

        out
    }

    /// Structured representation for the JSON conversion endpoint.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "pages": self.pages,
            "tables": self.tables,
            "text": self.text,
        })
    }
}

/// Attribute extracted text to pages.
///
/// pdf-extract yields a single text stream, so lines are apportioned evenly.
/// Page boundaries are approximate; callers needing exact layout are out of
/// scope for a plain-text pipeline.
fn split_pages(text: &str, page_count: u32) -> Vec<PageContent> {
    let lines: Vec<&str> = text.lines().collect();
    let per_page = (lines.len() / page_count as usize).max(1);

    (1..=page_count)
        .map(|number| {
            let start = (number as usize - 1) * per_page;
            let end = if number == page_count {
                lines.len()
            } else {
                (number as usize * per_page).min(lines.len())
            };
            PageContent {
                number,
                text: lines[start.min(lines.len())..end].join("\n"),
            }
        })
        .collect()
}
