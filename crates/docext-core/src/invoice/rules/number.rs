//! Invoice number extraction.

use tracing::debug;

use super::patterns::{INVOICE_NUMBER, INVOICE_NUMBER_STANDALONE};
use super::{ExtractionMatch, FieldExtractor};

/// Invoice number extractor.
pub struct InvoiceNumberExtractor;

impl InvoiceNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvoiceNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for InvoiceNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Labeled patterns first: "Invoice #", "Invoice No", "Invoice Number"
        for caps in INVOICE_NUMBER.captures_iter(text) {
            let full = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(caps[1].to_string(), full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }

        // Standalone "INV-..." tokens
        for caps in INVOICE_NUMBER_STANDALONE.captures_iter(text) {
            let value = caps[1].to_string();
            if results.iter().any(|r: &ExtractionMatch<String>| r.value == value) {
                continue;
            }
            let full = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(value, full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }

        // First match in document order wins.
        results.sort_by_key(|r| r.position.map(|(s, _)| s).unwrap_or(usize::MAX));
        results
    }
}

/// Extract the first invoice number from text, if any.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    InvoiceNumberExtractor::new().extract(text).map(|m| {
        debug!("invoice number {:?} matched {:?}", m.value, m.source);
        m.value
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hash_form() {
        assert_eq!(
            extract_invoice_number("Invoice #12345"),
            Some("12345".to_string())
        );
    }

    #[test]
    fn test_no_form() {
        assert_eq!(
            extract_invoice_number("INVOICE NO 2024-0042\nsome body"),
            Some("2024-0042".to_string())
        );
    }

    #[test]
    fn test_inv_prefix() {
        assert_eq!(
            extract_invoice_number("Reference: INV-2024-001"),
            Some("INV-2024-001".to_string())
        );
    }

    #[test]
    fn test_first_match_in_document_order() {
        let text = "See INV-7/2024 above\nInvoice # 999";
        assert_eq!(extract_invoice_number(text), Some("INV-7/2024".to_string()));
    }

    #[test]
    fn test_match_carries_provenance() {
        let m = InvoiceNumberExtractor::new()
            .extract("Ref text\nInvoice # 999")
            .unwrap();
        assert_eq!(m.value, "999");
        assert_eq!(m.source, "Invoice # 999");
        assert_eq!(m.position, Some((9, 22)));
    }

    #[test]
    fn test_absent_is_none_not_error() {
        assert_eq!(extract_invoice_number("no identifiers here"), None);
        assert_eq!(extract_invoice_number(""), None);
    }
}
