//! Header field extraction.
//!
//! Each label has one rule. A rule's value is the trimmed first capture group
//! of its first match; rules that find nothing yield an empty value so the
//! header always carries every label, in rule order.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use super::patterns::{
    C_PAGAMENTO, DATA_DA_PRICE, DATA_HORA, ENTREGA_ESTIMADA, PRE_PEDIDO, SOLD, TOTAL_DE_ITENS,
    VALOR_DO_PEDIDO, VENDEDOR,
};
use super::{ExtractionMatch, FieldExtractor};
use crate::models::order::{HeaderField, HeaderLabel, OrderHeader};

/// A labeled pattern rule.
#[derive(Debug, Clone, Copy)]
pub struct HeaderRule {
    label: HeaderLabel,
    pattern: &'static Regex,
}

impl HeaderRule {
    pub fn new(label: HeaderLabel, pattern: &'static Regex) -> Self {
        Self { label, pattern }
    }

    pub fn label(&self) -> HeaderLabel {
        self.label
    }

    pub fn pattern(&self) -> &'static Regex {
        self.pattern
    }

    fn to_match(&self, caps: &regex::Captures<'_>) -> Option<ExtractionMatch<String>> {
        let whole = caps.get(0)?;
        let value = caps.get(1)?.as_str().trim().to_string();
        Some(ExtractionMatch::new(value, whole.as_str()).with_position(whole.start(), whole.end()))
    }
}

impl FieldExtractor for HeaderRule {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.pattern
            .captures(text)
            .and_then(|caps| self.to_match(&caps))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| self.to_match(&caps))
            .collect()
    }
}

lazy_static! {
    /// Header rules of the pre-order layout, in output order.
    pub static ref PRE_ORDER_HEADER_RULES: [HeaderRule; 9] = [
        HeaderRule::new(HeaderLabel::PrePedido, &PRE_PEDIDO),
        HeaderRule::new(HeaderLabel::Sold, &SOLD),
        HeaderRule::new(HeaderLabel::Vendedor, &VENDEDOR),
        HeaderRule::new(HeaderLabel::DataHora, &DATA_HORA),
        HeaderRule::new(HeaderLabel::EntregaEstimada, &ENTREGA_ESTIMADA),
        HeaderRule::new(HeaderLabel::DataDaPrice, &DATA_DA_PRICE),
        HeaderRule::new(HeaderLabel::TotalDeItens, &TOTAL_DE_ITENS),
        HeaderRule::new(HeaderLabel::CondicaoPagamento, &C_PAGAMENTO),
        HeaderRule::new(HeaderLabel::ValorDoPedido, &VALOR_DO_PEDIDO),
    ];
}

/// Apply `rules` in order and collect the header.
///
/// `sentinel` replaces an unmatched pre-order or sold-to number in the
/// standalone id fields; the field list itself keeps the empty value.
pub fn extract_header(text: &str, rules: &[HeaderRule], sentinel: &str) -> OrderHeader {
    let mut fields = Vec::with_capacity(rules.len());
    let mut pre_pedido = sentinel.to_string();
    let mut sold = sentinel.to_string();

    for rule in rules {
        let value = match rule.extract(text) {
            Some(m) => {
                trace!("{} matched {:?} at {:?}", rule.label(), m.source, m.position);
                m.value
            }
            None => String::new(),
        };

        if !value.is_empty() {
            match rule.label() {
                HeaderLabel::PrePedido => pre_pedido = value.clone(),
                HeaderLabel::Sold => sold = value.clone(),
                _ => {}
            }
        }

        fields.push(HeaderField::new(rule.label(), value));
    }

    OrderHeader {
        fields,
        pre_pedido,
        sold,
    }
}
