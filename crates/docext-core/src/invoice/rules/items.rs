//! Line item segmentation from tabular invoice text.

use rust_decimal::Decimal;

use super::amounts::AmountExtractor;
use super::FieldExtractor;
use crate::models::invoice::LineItem;
use crate::pdf::split_row;

/// Segment table-like rows of the text into line items.
///
/// Best-effort: rows without a recognizable amount are skipped, header and
/// summary rows are filtered out, and an empty Vec is returned when no
/// table structure is recoverable from plain text.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    let mut items = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if is_header_row(trimmed) {
            continue;
        }
        if is_summary_row(trimmed) {
            // Summary section follows the item table.
            if !items.is_empty() {
                break;
            }
            continue;
        }

        let Some(cells) = split_row(line) else {
            continue;
        };
        if let Some(item) = parse_item_row(&cells) {
            items.push(item);
        }
    }

    items
}

fn is_header_row(line: &str) -> bool {
    let lower = line.to_lowercase();
    (lower.contains("description") || lower.contains("item"))
        && (lower.contains("qty") || lower.contains("quantity") || lower.contains("amount") || lower.contains("price"))
}

fn is_summary_row(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("total")
        || lower.starts_with("subtotal")
        || lower.starts_with("grand total")
        || lower.starts_with("amount due")
        || lower.starts_with("balance")
}

fn parse_item_row(cells: &[String]) -> Option<LineItem> {
    let joined = cells.join(" | ");
    let amounts: Vec<Decimal> = AmountExtractor::new()
        .extract_all(&joined)
        .into_iter()
        .map(|m| m.value)
        .collect();

    if amounts.is_empty() {
        return None;
    }

    // Description: the longest cell that is not purely numeric.
    let description = cells
        .iter()
        .filter(|c| !c.chars().all(|ch| ch.is_ascii_digit() || ch == '.' || ch == ',' || ch == '$'))
        .max_by_key(|c| c.len())?
        .trim()
        .to_string();

    // Quantity: first cell that reads as a plausible count.
    let quantity = cells.iter().find_map(|c| {
        let c = c.trim();
        if c.contains('.') || c.contains(',') {
            return None;
        }
        c.parse::<i64>()
            .ok()
            .filter(|&n| n > 0 && n < 10_000)
            .map(Decimal::from)
    });

    let amount = amounts.last().copied();
    let unit_price = if amounts.len() >= 2 {
        Some(amounts[amounts.len() - 2])
    } else {
        None
    };

    Some(LineItem {
        description,
        quantity,
        unit_price,
        amount,
    })
}
