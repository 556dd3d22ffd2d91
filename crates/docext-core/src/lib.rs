//! Core library for the docext PDF processing service.
//!
//! This crate provides:
//! - PDF conversion (text extraction, page splitting, table detection)
//! - Markdown and structured JSON export
//! - Best-effort invoice field extraction (number, date, vendor, total, line items)
//! - Service configuration

pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;

pub use error::{DocextError, PdfError, Result};
pub use invoice::{InvoiceExtractor, RuleInvoiceExtractor};
pub use models::config::ServiceConfig;
pub use models::invoice::{InvoiceRecord, LineItem};
pub use pdf::{ConvertedDocument, DocumentConverter, PageContent, TableData};
