//! Purchase-order data models.
//!
//! Every value is kept as the literal text found in the document. Nothing is
//! parsed into numbers or dates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback used in place of an unmatched order id when naming the output.
pub const SENTINEL: &str = "Desconhecido";

/// A fully extracted purchase order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Summary fields from the order header.
    pub header: OrderHeader,

    /// Ordered products, in document order.
    pub items: Vec<LineItem>,
}

/// The nine labeled header fields plus the two ids used for naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderHeader {
    /// All nine fields, in [`HeaderLabel::ALL`] order.
    pub fields: Vec<HeaderField>,

    /// Pre-order number, or the sentinel when absent.
    pub pre_pedido: String,

    /// Sold-to number, or the sentinel when absent.
    pub sold: String,
}

impl OrderHeader {
    /// Look up a field value by label. Unmatched fields return `Some("")`.
    pub fn get(&self, label: HeaderLabel) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }

    /// Labels whose rule found nothing.
    pub fn missing(&self) -> Vec<HeaderLabel> {
        self.fields
            .iter()
            .filter(|f| f.value.is_empty())
            .map(|f| f.label)
            .collect()
    }
}

impl Default for OrderHeader {
    fn default() -> Self {
        Self {
            fields: HeaderLabel::ALL
                .iter()
                .map(|&label| HeaderField::empty(label))
                .collect(),
            pre_pedido: SENTINEL.to_string(),
            sold: SENTINEL.to_string(),
        }
    }
}

/// Labels of the order header, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderLabel {
    #[serde(rename = "Pré pedido")]
    PrePedido,
    #[serde(rename = "Sold")]
    Sold,
    #[serde(rename = "Vendedor")]
    Vendedor,
    #[serde(rename = "Data/Hora")]
    DataHora,
    #[serde(rename = "Entrega estimada")]
    EntregaEstimada,
    #[serde(rename = "Data da price")]
    DataDaPrice,
    #[serde(rename = "Total de itens")]
    TotalDeItens,
    #[serde(rename = "C. Pagamento")]
    CondicaoPagamento,
    #[serde(rename = "Valor do pedido")]
    ValorDoPedido,
}

impl HeaderLabel {
    /// Every label, in the fixed output order.
    pub const ALL: [HeaderLabel; 9] = [
        HeaderLabel::PrePedido,
        HeaderLabel::Sold,
        HeaderLabel::Vendedor,
        HeaderLabel::DataHora,
        HeaderLabel::EntregaEstimada,
        HeaderLabel::DataDaPrice,
        HeaderLabel::TotalDeItens,
        HeaderLabel::CondicaoPagamento,
        HeaderLabel::ValorDoPedido,
    ];

    /// The label as printed in the document and in the output table.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderLabel::PrePedido => "Pré pedido",
            HeaderLabel::Sold => "Sold",
            HeaderLabel::Vendedor => "Vendedor",
            HeaderLabel::DataHora => "Data/Hora",
            HeaderLabel::EntregaEstimada => "Entrega estimada",
            HeaderLabel::DataDaPrice => "Data da price",
            HeaderLabel::TotalDeItens => "Total de itens",
            HeaderLabel::CondicaoPagamento => "C. Pagamento",
            HeaderLabel::ValorDoPedido => "Valor do pedido",
        }
    }
}

impl fmt::Display for HeaderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single labeled header value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderField {
    pub label: HeaderLabel,
    /// Trimmed match, or empty when the label was not found.
    pub value: String,
}

impl HeaderField {
    pub fn new(label: HeaderLabel, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }

    pub fn empty(label: HeaderLabel) -> Self {
        Self::new(label, String::new())
    }
}

/// One ordered product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name, possibly followed by descriptive text.
    pub product: String,

    pub sku: String,

    pub ean: String,

    /// Box descriptor (e.g. "1cx").
    pub box_code: String,

    /// Weight including the "kg" unit.
    pub weight: String,

    /// Quantity in units.
    pub unit_quantity: String,

    /// Quantity in whole packages.
    pub whole_quantity: String,

    /// Unit price, formatted as `R$ 10,00`.
    pub unit_price: String,

    /// Discount with its percentage, formatted as `R$ 1,00 (10%)`.
    pub discount: String,

    /// Line total, formatted as `R$ 9,00`.
    pub total: String,
}

impl LineItem {
    /// Column titles of the item table.
    pub const COLUMNS: [&'static str; 10] = [
        "Produto",
        "SKU",
        "EAN",
        "Caixa",
        "Peso",
        "Qtd. Unidade",
        "Qtd. Inteira",
        "Valor unitário",
        "Desconto",
        "Total",
    ];

    /// Cell values in [`LineItem::COLUMNS`] order.
    pub fn cells(&self) -> [&str; 10] {
        [
            self.product.as_str(),
            self.sku.as_str(),
            self.ean.as_str(),
            self.box_code.as_str(),
            self.weight.as_str(),
            self.unit_quantity.as_str(),
            self.whole_quantity.as_str(),
            self.unit_price.as_str(),
            self.discount.as_str(),
            self.total.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_header_has_all_labels() {
        let header = OrderHeader::default();
        let labels: Vec<HeaderLabel> = header.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, HeaderLabel::ALL.to_vec());
        assert_eq!(header.pre_pedido, SENTINEL);
        assert_eq!(header.sold, SENTINEL);
        assert_eq!(header.missing().len(), 9);
    }

    #[test]
    fn test_header_label_serializes_as_document_text() {
        let json = serde_json::to_string(&HeaderLabel::PrePedido).unwrap();
        assert_eq!(json, "\"Pré pedido\"");

        for label in HeaderLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }

    #[test]
    fn test_line_item_cells_follow_columns() {
        let item = LineItem {
            product: "Produto X".into(),
            total: "R$ 9,00".into(),
            ..Default::default()
        };
        let cells = item.cells();
        assert_eq!(cells.len(), LineItem::COLUMNS.len());
        assert_eq!(cells[0], "Produto X");
        assert_eq!(cells[9], "R$ 9,00");
    }
}
