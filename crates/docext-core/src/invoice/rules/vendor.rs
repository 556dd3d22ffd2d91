//! Vendor name extraction.
//!
//! Inherently unreliable signal; best-effort only. Never errors.

use super::patterns::{AMOUNT, FIELD_LABEL_LINE, VENDOR_LABEL};

/// Extract the vendor name from invoice text.
///
/// An explicit label (`From:`, `Vendor:`, `Sold by:`) wins; otherwise the
/// first non-empty line that does not look like a field label or an amount
/// is taken as the letterhead name.
pub fn extract_vendor(text: &str) -> Option<String> {
    if let Some(caps) = VENDOR_LABEL.captures(text) {
        let name = caps[1].trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    text.lines()
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !FIELD_LABEL_LINE.is_match(line)
                && !AMOUNT.is_match(line)
                && line.chars().any(|c| c.is_alphabetic())
        })
        .map(|line| line.to_string())
}
