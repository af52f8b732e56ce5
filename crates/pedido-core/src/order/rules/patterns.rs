//! Regex patterns for the pre-order ("Pré pedido") layout.

use lazy_static::lazy_static;
use regex::Regex;

/// Literal text that opens the item list.
pub const ITEM_SECTION_MARKER: &str = "Itens do pedido";

/// Prefix of every currency value in the item table.
pub const CURRENCY_PREFIX: &str = "R$";

lazy_static! {
    // Order ids
    pub static ref PRE_PEDIDO: Regex = Regex::new(
        r"Pré pedido\s+(\d+)"
    ).unwrap();

    pub static ref SOLD: Regex = Regex::new(
        r"Sold\s+(\d+)"
    ).unwrap();

    // Salesperson: ASCII letters and spaces, closed by a newline
    pub static ref VENDEDOR: Regex = Regex::new(
        r"Vendedor\s+([A-Za-z\s]+)\n"
    ).unwrap();

    // Timestamps
    pub static ref DATA_HORA: Regex = Regex::new(
        r"Data/Hora\s+([\d/:\s]+)"
    ).unwrap();

    pub static ref ENTREGA_ESTIMADA: Regex = Regex::new(
        r"Entrega estimada\s+([\d/:\s]+)"
    ).unwrap();

    pub static ref DATA_DA_PRICE: Regex = Regex::new(
        r"Data da price\s+([\d/]+)"
    ).unwrap();

    // Totals
    pub static ref TOTAL_DE_ITENS: Regex = Regex::new(
        r"Total de itens\s+(\d+)"
    ).unwrap();

    // Payment terms run up to the "Valor do pedido" line. The regex crate has
    // no look-ahead, so the next label is consumed instead of asserted.
    pub static ref C_PAGAMENTO: Regex = Regex::new(
        r"C\. Pagamento\s+([\w\s]+?)\nValor do pedido"
    ).unwrap();

    pub static ref VALOR_DO_PEDIDO: Regex = Regex::new(
        r"Valor do pedido\s+R\$\s([\d,.]+)"
    ).unwrap();

    // One item record: name line, then SKU through total. Groups:
    // 1 name, 2 SKU, 3 EAN, 4 box, 5 weight, 6 unit qty, 7 whole qty,
    // 8 unit price, 9 discount, 10 discount %, 11 total.
    pub static ref ITEM_RECORD: Regex = Regex::new(concat!(
        r"(?s)([\w\s]+)\nSKU:\s*(\d+)\s*EAN:\s*(\d+)\s*Caixa:\s*([\w\s]+)\s*",
        r"Peso:\s*([\d,]+kg)\s*Qtd. Unidade:\s*(\d+)\s*Qtd. Inteira:\s*([\w\s]+)\s*",
        r"Valor unitário:\s*R\$\s*([\d,.]+)\s*Desconto:\s*R\$\s*([\d,.]+)\s*\(([\d,.%]+)\)\s*",
        r"Total:\s*R\$\s*([\d,.]+)",
    )).unwrap();
}
