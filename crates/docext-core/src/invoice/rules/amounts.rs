//! Amount extraction and parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT, DATE_NUMERIC, TOTAL};
use super::{ExtractionMatch, FieldExtractor};

/// Amount field extractor: finds every currency-like token in the text.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in AMOUNT.captures_iter(text) {
            let integer_part: String = caps[1]
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            let amount_str = format!("{}.{}", integer_part, &caps[2]);

            if let Ok(amount) = Decimal::from_str(&amount_str) {
                let full = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(amount, full.as_str())
                        .with_position(full.start(), full.end()),
                );
            }
        }

        results
    }
}

/// Extract the total amount from invoice text.
///
/// The first amount following a total-like label wins; when no label is
/// found, the largest amount in the document is used as a fallback.
/// Malformed numeric text yields `None`, never an error.
pub fn extract_total(text: &str) -> Option<Decimal> {
    let extractor = AmountExtractor::new();

    for caps in TOTAL.captures_iter(text) {
        let slice = &caps[1];
        if let Some(m) = extractor.extract(slice) {
            return Some(m.value);
        }
        // Labeled integer totals without decimals, e.g. "Total: 1200"
        if let Some(amount) = parse_amount(slice) {
            return Some(amount);
        }
    }

    // Dotted numeric dates ("15.01.2024") would otherwise read as amounts;
    // strip them before the unlabeled scan.
    let scrubbed = DATE_NUMERIC.replace_all(text, " ");
    extractor
        .extract_all(&scrubbed)
        .into_iter()
        .map(|m| m.value)
        .max()
}

/// Parse a free-form amount string: `1,234.56`, `1 234,56`, `1234`.
///
/// When both separators appear, the one occurring last is taken as the
/// decimal point.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') && !cleaned.contains('.') {
        // Single comma with two trailing digits is a decimal separator,
        // otherwise commas are thousands separators.
        let after = cleaned.rsplit(',').next().unwrap_or("");
        if cleaned.matches(',').count() == 1 && after.len() == 2 {
            cleaned.replace(',', ".")
        } else {
            cleaned.replace(',', "")
        }
    } else if cleaned.contains(',') && cleaned.contains('.') {
        let comma_pos = cleaned.rfind(',');
        let dot_pos = cleaned.rfind('.');
        match (comma_pos, dot_pos) {
            (Some(c), Some(d)) if c > d => cleaned.replace('.', "").replace(',', "."),
            _ => cleaned.replace(',', ""),
        }
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).ok()
}
