//! Best-effort table detection from extracted plain text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Three or more columns separated by runs of 2+ spaces.
    static ref MULTI_COLUMN: Regex = Regex::new(r"\S(?:[^\S\n]{2,})\S").unwrap();
}

/// A table recovered from plain text as rows of cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    /// Rows in document order, each a list of trimmed cell strings.
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    /// Render the table as a Markdown pipe table. The first row is treated
    /// as the header.
    pub fn to_markdown(&self) -> String {
        let Some(header) = self.rows.first() else {
            return String::new();
        };

        let mut out = String::new();
        out.push_str(&render_row(header));
        out.push('\n');
        out.push_str(&format!("|{}\n", " --- |".repeat(header.len())));
        for row in &self.rows[1..] {
            out.push_str(&render_row(row));
            out.push('\n');
        }
        out
    }
}

fn render_row(cells: &[String]) -> String {
    let mut out = String::from("|");
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
    out
}

/// Detect table-like runs of lines in extracted text.
///
/// A line counts as tabular when it splits into at least two cells on an
/// explicit separator (`|` or tab) or into at least three columns on runs of
/// two or more spaces. Two or more consecutive tabular lines form a table.
/// Returns an empty Vec when no structure is recoverable.
pub fn detect_tables(text: &str) -> Vec<TableData> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        match split_row(line) {
            Some(cells) => current.push(cells),
            None => flush_table(&mut current, &mut tables),
        }
    }
    flush_table(&mut current, &mut tables);

    tables
}

fn flush_table(current: &mut Vec<Vec<String>>, tables: &mut Vec<TableData>) {
    if current.len() >= 2 {
        tables.push(TableData {
            rows: std::mem::take(current),
        });
    } else {
        current.clear();
    }
}

/// Split a single line into cells, or None when the line is not tabular.
pub fn split_row(line: &str) -> Option<Vec<String>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains('|') || trimmed.contains('\t') {
        let cells: Vec<String> = trimmed
            .split(|c| c == '|' || c == '\t')
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if cells.len() >= 2 {
            return Some(cells);
        }
        return None;
    }

    // Whitespace-aligned columns: require 3+ to avoid matching prose.
    let separators = MULTI_COLUMN.find_iter(trimmed).count();
    if separators >= 2 {
        let cells: Vec<String> = split_on_wide_gaps(trimmed);
        if cells.len() >= 3 {
            return Some(cells);
        }
    }

    None
}

fn split_on_wide_gaps(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut space_run = 0usize;

    for c in line.chars() {
        if c == ' ' {
            space_run += 1;
            if space_run < 2 {
                current.push(c);
            } else if space_run == 2 {
                // Gap confirmed: retract the single space kept so far.
                current.pop();
            }
        } else {
            if space_run >= 2 && !current.trim().is_empty() {
                cells.push(current.trim().to_string());
                current = String::new();
            }
            space_run = 0;
            current.push(c);
        }
    }
    if !current.trim().is_empty() {
        cells.push(current.trim().to_string());
    }
    cells
}
