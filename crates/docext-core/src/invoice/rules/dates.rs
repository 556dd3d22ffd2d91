//! Date extraction and normalization.
//!
//! Numeric `a/b/c` forms are read day-first; when that yields an impossible
//! date (month > 12) the month-first reading is tried. Genuinely ambiguous
//! dates (both readings valid) are NOT disambiguated: the day-first reading
//! wins, which is a documented limitation rather than a locale decision.

use chrono::NaiveDate;

use super::patterns::{DATE_DAY_FIRST, DATE_ISO, DATE_LABEL, DATE_MONTH_FIRST, DATE_NUMERIC};
use super::{ExtractionMatch, FieldExtractor};

/// Output format for normalized dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<Self::Output> = Vec::new();

        // ISO first: an unambiguous YYYY-MM-DD should not be re-read as D-M-Y.
        for caps in DATE_ISO.captures_iter(text) {
            let year: i32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let full = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(date, full.as_str())
                        .with_position(full.start(), full.end()),
                );
            }
        }

        for caps in DATE_NUMERIC.captures_iter(text) {
            let full = caps.get(0).unwrap();
            if overlaps(&results, full.start()) {
                continue;
            }

            let a: u32 = caps[1].parse().unwrap_or(0);
            let b: u32 = caps[2].parse().unwrap_or(0);
            let year = parse_year(&caps[3]);

            // Day-first, then month-first when day-first is impossible.
            let date = NaiveDate::from_ymd_opt(year, b, a)
                .or_else(|| NaiveDate::from_ymd_opt(year, a, b));

            if let Some(date) = date {
                results.push(
                    ExtractionMatch::new(date, full.as_str())
                        .with_position(full.start(), full.end()),
                );
            }
        }

        // "January 15, 2024"
        for caps in DATE_MONTH_FIRST.captures_iter(text) {
            let month = month_to_number(&caps[1]);
            let day: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let full = caps.get(0).unwrap();
                if overlaps(&results, full.start()) {
                    continue;
                }
                results.push(
                    ExtractionMatch::new(date, full.as_str())
                        .with_position(full.start(), full.end()),
                );
            }
        }

        // "15 January 2024"
        for caps in DATE_DAY_FIRST.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month = month_to_number(&caps[2]);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let full = caps.get(0).unwrap();
                if overlaps(&results, full.start()) {
                    continue;
                }
                results.push(
                    ExtractionMatch::new(date, full.as_str())
                        .with_position(full.start(), full.end()),
                );
            }
        }

        // First syntactic match in document order wins.
        results.sort_by_key(|r| r.position.map(|(s, _)| s).unwrap_or(usize::MAX));
        results
    }
}

fn overlaps(results: &[ExtractionMatch<NaiveDate>], start: usize) -> bool {
    results
        .iter()
        .any(|r| r.position.is_some_and(|(s, e)| start >= s && start < e))
}

/// Extract the invoice date, normalized to `YYYY-MM-DD`.
///
/// A date on a labeled line (`Invoice Date:`, `Date:`) takes priority over
/// the first free-standing date in the document.
pub fn extract_date(text: &str) -> Option<String> {
    let extractor = DateExtractor::new();

    if let Some(caps) = DATE_LABEL.captures(text) {
        if let Some(date) = extractor.extract(&caps[1]) {
            return Some(date.value.format(DATE_FORMAT).to_string());
        }
    }

    extractor
        .extract(text)
        .map(|m| m.value.format(DATE_FORMAT).to_string())
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: 00-50 -> 2000s, 51-99 -> 1900s
        if year <= 50 {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

fn month_to_number(month: &str) -> u32 {
    match month.to_lowercase().get(..3) {
        Some("jan") => 1,
        Some("feb") => 2,
        Some("mar") => 3,
        Some("apr") => 4,
        Some("may") => 5,
        Some("jun") => 6,
        Some("jul") => 7,
        Some("aug") => 8,
        Some("sep") => 9,
        Some("oct") => 10,
        Some("nov") => 11,
        Some("dec") => 12,
        _ => 0,
    }
}
