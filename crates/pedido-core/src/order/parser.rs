//! Order parser driving a document layout.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use super::layout::{OrderLayout, PreOrderLayout};
use super::rules::{extract_header, item_section};
use crate::models::order::{HeaderLabel, Order, SENTINEL};

/// Result of order extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Extracted order data.
    pub order: Order,
    /// Raw extracted text.
    pub raw_text: String,
    /// Extraction warnings. Missing data is reported here, never as an error.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for order parsing.
pub trait OrderParser {
    /// Parse an order from flat document text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Parser that applies one [`OrderLayout`] to the document text.
pub struct LayoutParser<L = PreOrderLayout> {
    layout: L,
    sentinel: String,
}

impl LayoutParser<PreOrderLayout> {
    /// Create a parser for the pre-order layout.
    pub fn new() -> Self {
        Self::with_layout(PreOrderLayout)
    }
}

impl Default for LayoutParser<PreOrderLayout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: OrderLayout> LayoutParser<L> {
    /// Create a parser for a specific layout.
    pub fn with_layout(layout: L) -> Self {
        Self {
            layout,
            sentinel: SENTINEL.to_string(),
        }
    }

    /// Set the stand-in for unmatched order ids.
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }
}

impl<L: OrderLayout> OrderParser for LayoutParser<L> {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!(
            "Parsing {} order from {} characters of text",
            self.layout.name(),
            text.len()
        );

        let header = extract_header(text, self.layout.header_rules(), &self.sentinel);
        for label in header.missing() {
            warnings.push(format!("Could not extract {}", label));
        }

        let marker = self.layout.item_marker();
        let items = match item_section(text, marker) {
            Some(section) => {
                let items = self.layout.parse_items(&section);
                if items.is_empty() {
                    warnings.push(format!("No item records found after {:?}", marker));
                }
                items
            }
            None => {
                warnings.push(format!("Item section marker {:?} not found", marker));
                Vec::new()
            }
        };

        if let Some(declared) = header
            .get(HeaderLabel::TotalDeItens)
            .and_then(|v| v.parse::<usize>().ok())
        {
            if declared != items.len() {
                warnings.push(format!(
                    "Order declares {} items but {} were parsed",
                    declared,
                    items.len()
                ));
            }
        }

        debug!(
            "Extracted order {} / sold {} with {} items and {} warnings",
            header.pre_pedido,
            header.sold,
            items.len(),
            warnings.len()
        );

        ExtractionResult {
            order: Order { header, items },
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
