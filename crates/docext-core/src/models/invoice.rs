//! Invoice record model produced by field extraction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Best-effort invoice data extracted from document text.
///
/// Every field except `raw_text` is optional: extraction never fails, it
/// returns whatever it could locate. Immutable once built; never persisted
/// beyond the response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Invoice number/identifier, e.g. "12345" or "INV-2024-001".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Invoice date, normalized to YYYY-MM-DD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Vendor/seller name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Total amount due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Decimal>,

    /// Line items, in document order. Often empty when no table structure
    /// is recoverable from plain text.
    #[serde(default)]
    pub line_items: Vec<LineItem>,

    /// Full extracted document text, kept for manual correction downstream.
    pub raw_text: String,
}

impl InvoiceRecord {
    /// Create an empty record carrying only the raw text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            raw_text: text.into(),
            ..Self::default()
        }
    }

    /// Names of the scalar fields that could not be extracted.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.invoice_number.is_none() {
            missing.push("invoice_number");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.vendor.is_none() {
            missing.push("vendor");
        }
        if self.total_amount.is_none() {
            missing.push("total_amount");
        }
        missing
    }
}

/// A single line item segmented from tabular invoice text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Product/service description.
    pub description: String,

    /// Quantity, when a plausible count was found on the row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,

    /// Unit price, when the row carried more than one amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,

    /// Row total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_empty_record_serializes_without_optional_fields() {
        let record = InvoiceRecord::from_text("some text");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["raw_text"], "some text");
        assert!(json.get("invoice_number").is_none());
        assert!(json.get("total_amount").is_none());
        assert_eq!(json["line_items"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_fields() {
        let mut record = InvoiceRecord::from_text("x");
        assert_eq!(
            record.missing_fields(),
            vec!["invoice_number", "date", "vendor", "total_amount"]
        );

        record.invoice_number = Some("12345".to_string());
        record.total_amount = Some(Decimal::from_str("99.50").unwrap());
        assert_eq!(record.missing_fields(), vec!["date", "vendor"]);
    }

    #[test]
    fn test_record_round_trip() {
        let record = InvoiceRecord {
            invoice_number: Some("INV-001".to_string()),
            date: Some("2024-01-15".to_string()),
            vendor: Some("Acme Corp".to_string()),
            total_amount: Some(Decimal::from_str("1230.00").unwrap()),
            line_items: vec![LineItem {
                description: "Consulting".to_string(),
                quantity: Some(Decimal::ONE),
                unit_price: Some(Decimal::from_str("1230.00").unwrap()),
                amount: Some(Decimal::from_str("1230.00").unwrap()),
            }],
            raw_text: "Invoice INV-001".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.invoice_number.as_deref(), Some("INV-001"));
        assert_eq!(back.line_items.len(), 1);
    }
}
