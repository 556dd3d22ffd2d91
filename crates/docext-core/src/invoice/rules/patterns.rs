//! Common regex patterns for invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Invoice number patterns
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)\binvoice\s*(?:number|num\.?|no\.?|#)\s*[:.]?\s*([A-Za-z0-9][A-Za-z0-9/_-]*)"
    ).unwrap();

    pub static ref INVOICE_NUMBER_STANDALONE: Regex = Regex::new(
        r"(?i)\b(INV[-/][0-9][0-9A-Za-z/-]*)\b"
    ).unwrap();

    // Numeric date forms: 15/01/2024, 15-01-24, 15.01.2024
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{2,4})\b"
    ).unwrap();

    // ISO form: 2024-01-15
    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4})[/\-](\d{1,2})[/\-](\d{1,2})\b"
    ).unwrap();

    // Month-name forms: "January 15, 2024" / "Jan 15 2024"
    pub static ref DATE_MONTH_FIRST: Regex = Regex::new(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})\b"
    ).unwrap();

    // "15 January 2024" / "15 Jan 2024"
    pub static ref DATE_DAY_FIRST: Regex = Regex::new(
        r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?\s+(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?,?\s+(\d{4})\b"
    ).unwrap();

    // Labeled date line; longest labels first so "invoice date" wins over "date"
    pub static ref DATE_LABEL: Regex = Regex::new(
        r"(?i)\b(?:invoice\s+date|date\s+of\s+issue|issue\s+date|date)\b\s*[:\-]?\s*([^\n]+)"
    ).unwrap();

    // Amounts with two decimal places, thousands separated by comma, dot,
    // space, or non-breaking space: 1,234.56 / 1 234,56 / 1234.56
    pub static ref AMOUNT: Regex = Regex::new(
        r"(\d{1,3}(?:[.,\s\u{00a0}]\d{3})*|\d+)[.,](\d{2})\b"
    ).unwrap();

    // Total amount near a label
    pub static ref TOTAL: Regex = Regex::new(
        r"(?i)\b(?:grand\s+total|total\s+due|total\s+amount|amount\s+due|balance\s+due|total)\b[ \t]*[:\-]?[ \t]*(?:USD|EUR|GBP|[$\u{20ac}\u{a3}])?[ \t]*([0-9][0-9., \t\u{00a0}]*)"
    ).unwrap();

    // Vendor following an explicit label
    pub static ref VENDOR_LABEL: Regex = Regex::new(
        r"(?i)\b(?:from|vendor|sold\s+by|billed?\s+from|supplier)\s*[:\-]\s*([^\n]+)"
    ).unwrap();

    // Lines that are field labels rather than a vendor name
    pub static ref FIELD_LABEL_LINE: Regex = Regex::new(
        r"(?i)^(?:invoice|date|total|subtotal|amount|bill|ship|tax|vat|due|balance|page|statement|receipt|payment|terms|qty|quantity|description|p\.?o\.?)\b"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_labeled() {
        let caps = INVOICE_NUMBER.captures("Invoice #12345").unwrap();
        assert_eq!(&caps[1], "12345");

        let caps = INVOICE_NUMBER.captures("invoice no. ABC-99").unwrap();
        assert_eq!(&caps[1], "ABC-99");

        let caps = INVOICE_NUMBER.captures("Invoice Number: 2024/001").unwrap();
        assert_eq!(&caps[1], "2024/001");
    }

    #[test]
    fn test_invoice_number_standalone() {
        let caps = INVOICE_NUMBER_STANDALONE.captures("Ref INV-2024-001 enclosed").unwrap();
        assert_eq!(&caps[1], "INV-2024-001");
    }

    #[test]
    fn test_invoice_date_label_beats_plain_date() {
        let caps = DATE_LABEL.captures("Invoice Date: 15/01/2024").unwrap();
        assert_eq!(&caps[1], "15/01/2024");
    }

    #[test]
    fn test_total_label_variants() {
        for line in [
            "Total: $1,234.56",
            "Amount Due 1,234.56",
            "Grand Total: USD 1,234.56",
            "Balance due: 1,234.56",
        ] {
            let caps = TOTAL.captures(line).unwrap_or_else(|| panic!("no match: {line}"));
            assert!(caps[1].starts_with('1'), "bad capture for {line}: {}", &caps[1]);
        }
    }
}
