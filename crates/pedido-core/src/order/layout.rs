//! Document layouts.
//!
//! A layout owns every pattern tied to one version of the order document.
//! Supporting a new document version means adding a layout; the parser,
//! the workbook assembly, and the CLI only ever see [`Order`](crate::Order).

use super::rules::{
    FieldExtractor, HeaderRule, ITEM_SECTION_MARKER, ItemExtractor, PRE_ORDER_HEADER_RULES,
};
use crate::models::order::LineItem;

/// Pattern table for one document layout.
pub trait OrderLayout {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Header rules, in output order.
    fn header_rules(&self) -> &[HeaderRule];

    /// Literal text that opens the item list.
    fn item_marker(&self) -> &str;

    /// Parse every item record of an item section (marker already removed).
    fn parse_items(&self, section: &str) -> Vec<LineItem>;
}

/// The "Pré pedido" purchase-order layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreOrderLayout;

impl OrderLayout for PreOrderLayout {
    fn name(&self) -> &'static str {
        "pre-pedido"
    }

    fn header_rules(&self) -> &[HeaderRule] {
        &*PRE_ORDER_HEADER_RULES
    }

    fn item_marker(&self) -> &str {
        ITEM_SECTION_MARKER
    }

    fn parse_items(&self, section: &str) -> Vec<LineItem> {
        ItemExtractor::new().extract_all(section)
    }
}
