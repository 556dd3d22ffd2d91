//! Invoice field extraction module.

mod extractor;
pub mod rules;

pub use extractor::RuleInvoiceExtractor;

use crate::models::invoice::InvoiceRecord;

/// Trait for invoice field extractors.
///
/// Extraction is infallible by contract: each field is best-effort and a
/// field that cannot be located is left empty. The returned record always
/// carries the full raw text.
pub trait InvoiceExtractor {
    /// Extract invoice data from plain text.
    fn extract(&self, text: &str) -> InvoiceRecord;
}
