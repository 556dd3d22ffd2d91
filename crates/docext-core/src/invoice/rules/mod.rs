//! Rule-based field extractors for invoice text.

pub mod amounts;
pub mod dates;
pub mod items;
pub mod number;
pub mod patterns;
pub mod vendor;

pub use amounts::{extract_total, parse_amount, AmountExtractor};
pub use dates::{extract_date, DateExtractor};
pub use items::extract_line_items;
pub use number::{extract_invoice_number, InvoiceNumberExtractor};
pub use vendor::extract_vendor;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field in document order.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A single extracted value with provenance.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
