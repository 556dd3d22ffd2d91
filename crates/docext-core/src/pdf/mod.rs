//! PDF conversion module.

mod converter;
mod tables;

pub use converter::{ConvertedDocument, DocumentConverter, PageContent};
pub use tables::{detect_tables, split_row, TableData};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
