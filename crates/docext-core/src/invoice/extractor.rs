//! Rule-based invoice field extraction.

use tracing::debug;

use super::rules::{
    extract_date, extract_invoice_number, extract_line_items, extract_total, extract_vendor,
};
use super::InvoiceExtractor;
use crate::models::invoice::InvoiceRecord;

/// Pattern-based invoice extractor.
///
/// Each field is located independently; a miss on one field never affects
/// the others and the extraction as a whole cannot fail.
#[derive(Debug, Clone, Default)]
pub struct RuleInvoiceExtractor;

impl RuleInvoiceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl InvoiceExtractor for RuleInvoiceExtractor {
    fn extract(&self, text: &str) -> InvoiceRecord {
        let record = InvoiceRecord {
            invoice_number: extract_invoice_number(text),
            date: extract_date(text),
            vendor: extract_vendor(text),
            total_amount: extract_total(text),
            line_items: extract_line_items(text),
            raw_text: text.to_string(),
        };

        debug!(
            missing = ?record.missing_fields(),
            line_items = record.line_items.len(),
            "extracted invoice fields from {} chars",
            text.len()
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_extract_full_invoice() {
        let text = "\
Acme Corporation
123 Main Street

Invoice #12345
Invoice Date: 15/01/2024

Qty | Description | Unit Price | Amount
2 | Widget assembly | 10.00 | 20.00
1 | Consulting hour | 150.00 | 150.00

Total: $170.00
";

        let record = RuleInvoiceExtractor::new().extract(text);

        assert_eq!(record.invoice_number.as_deref(), Some("12345"));
        assert_eq!(record.date.as_deref(), Some("2024-01-15"));
        assert_eq!(record.vendor.as_deref(), Some("Acme Corporation"));
        assert_eq!(
            record.total_amount,
            Some(Decimal::from_str("170.00").unwrap())
        );
        assert_eq!(record.line_items.len(), 2);
        assert_eq!(record.raw_text, text);
    }

    #[test]
    fn test_unrecognizable_text_yields_empty_record() {
        let text = "The quick brown fox jumps over the lazy dog.";
        let record = RuleInvoiceExtractor::new().extract(text);

        assert_eq!(record.invoice_number, None);
        assert_eq!(record.date, None);
        assert_eq!(record.total_amount, None);
        assert!(record.line_items.is_empty());
        assert_eq!(record.raw_text, text);
    }

    #[test]
    fn test_field_independence() {
        // Only a total is present; everything else stays empty.
        let record = RuleInvoiceExtractor::new().extract("amount due: 99.95");
        assert_eq!(record.invoice_number, None);
        assert_eq!(
            record.total_amount,
            Some(Decimal::from_str("99.95").unwrap())
        );
    }

    #[test]
    fn test_empty_input() {
        let record = RuleInvoiceExtractor::new().extract("");
        assert_eq!(record.missing_fields().len(), 4);
        assert!(record.line_items.is_empty());
    }
}
