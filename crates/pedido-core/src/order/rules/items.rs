//! Line-item extraction.

use regex::{Captures, Regex};

use super::FieldExtractor;
use super::patterns::{CURRENCY_PREFIX, ITEM_RECORD};
use crate::models::order::LineItem;

/// Return the item section of `text`: everything from the first `marker`
/// onward, with every occurrence of the marker removed and the result
/// trimmed. `None` when the marker never appears.
pub fn item_section(text: &str, marker: &str) -> Option<String> {
    let start = text.find(marker)?;
    Some(text[start..].replace(marker, "").trim().to_string())
}

/// Format a currency amount as shown in the output table.
pub fn format_currency(amount: &str) -> String {
    format!("{} {}", CURRENCY_PREFIX, amount)
}

/// Format a discount amount with its percentage.
pub fn format_discount(amount: &str, percent: &str) -> String {
    format!("{} ({})", format_currency(amount), percent)
}

/// Item record extractor.
///
/// Runs the record pattern over an item section; every non-overlapping
/// match, left to right, becomes one [`LineItem`].
pub struct ItemExtractor {
    pattern: &'static Regex,
}

impl ItemExtractor {
    /// Extractor for the pre-order item record.
    pub fn new() -> Self {
        Self::with_pattern(&ITEM_RECORD)
    }

    /// Extractor for a record pattern with the same eleven groups.
    pub fn with_pattern(pattern: &'static Regex) -> Self {
        Self { pattern }
    }

    fn to_item(caps: &Captures<'_>) -> LineItem {
        let group = |i: usize| caps.get(i).map(|m| m.as_str().trim()).unwrap_or_default();

        LineItem {
            product: group(1).to_string(),
            sku: group(2).to_string(),
            ean: group(3).to_string(),
            box_code: group(4).to_string(),
            weight: group(5).to_string(),
            unit_quantity: group(6).to_string(),
            whole_quantity: group(7).to_string(),
            unit_price: format_currency(group(8)),
            discount: format_discount(group(9), group(10)),
            total: format_currency(group(11)),
        }
    }
}

impl Default for ItemExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ItemExtractor {
    type Output = LineItem;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern.captures(text).map(|caps| Self::to_item(&caps))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern
            .captures_iter(text)
            .map(|caps| Self::to_item(&caps))
            .collect()
    }
}
