//! Order to workbook assembly.

use tracing::info;

use super::{Sheet, Table, XlsxWriter};
use crate::error::WorkbookError;
use crate::models::config::WorkbookConfig;
use crate::models::order::{LineItem, Order};

/// MIME type of the produced workbook.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Characters that cannot appear in a portable file name.
const UNSAFE_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Workbook bytes plus the name to save them under.
#[derive(Debug, Clone)]
pub struct OutputWorkbook {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Derive the output file name from the pre-order and sold-to numbers.
pub fn output_filename(pre_pedido: &str, sold: &str) -> String {
    format!(
        "Pre-pedido-{}_Sold-{}.xlsx",
        filename_part(pre_pedido),
        filename_part(sold)
    )
}

fn filename_part(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if UNSAFE_FILENAME_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Two-column (Campo, Valor) table of the header fields.
pub fn header_table(order: &Order) -> Table {
    let mut table = Table::new(["Campo", "Valor"]);
    for field in &order.header.fields {
        table.push_row([field.label.as_str(), field.value.as_str()]);
    }
    table
}

/// One row per line item, in document order.
pub fn items_table(items: &[LineItem]) -> Table {
    let mut table = Table::new(LineItem::COLUMNS);
    for item in items {
        table.push_row(item.cells());
    }
    table
}

/// Lay both tables out on a single sheet.
pub fn build_sheet(order: &Order, config: &WorkbookConfig) -> Sheet {
    let mut sheet = Sheet::new(config.sheet_name.clone());
    sheet.place_table(&header_table(order), config.header_origin, config.bold_headers);
    sheet.place_table(
        &items_table(&order.items),
        config.items_origin,
        config.bold_headers,
    );
    sheet
}

/// Build the workbook for `order`.
pub fn assemble(order: &Order, config: &WorkbookConfig) -> Result<OutputWorkbook, WorkbookError> {
    let sheet = build_sheet(order, config);
    let bytes = XlsxWriter::new()
        .with_creator(config.creator.clone())
        .write(&sheet)?;
    let filename = output_filename(&order.header.pre_pedido, &order.header.sold);

    info!(
        "Assembled {} ({} items, {} bytes)",
        filename,
        order.items.len(),
        bytes.len()
    );

    Ok(OutputWorkbook { bytes, filename })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{HeaderField, HeaderLabel, OrderHeader};
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn sample_order() -> Order {
        let fields = HeaderLabel::ALL
            .iter()
            .map(|&label| match label {
                HeaderLabel::PrePedido => HeaderField::new(label, "12345"),
                HeaderLabel::Sold => HeaderField::new(label, "678"),
                HeaderLabel::Vendedor => HeaderField::new(label, "Maria Souza"),
                _ => HeaderField::empty(label),
            })
            .collect();
        let header = OrderHeader {
            fields,
            pre_pedido: "12345".into(),
            sold: "678".into(),
        };

        let item = LineItem {
            product: "Produto X".into(),
            sku: "1".into(),
            ean: "2".into(),
            box_code: "1cx".into(),
            weight: "1,5kg".into(),
            unit_quantity: "3".into(),
            whole_quantity: "1".into(),
            unit_price: "R$ 10,00".into(),
            discount: "R$ 1,00 (10%)".into(),
            total: "R$ 9,00".into(),
        };

        Order {
            header,
            items: vec![item],
        }
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(output_filename("12345", "678"), "Pre-pedido-12345_Sold-678.xlsx");
        assert_eq!(
            output_filename("Desconhecido", "Desconhecido"),
            "Pre-pedido-Desconhecido_Sold-Desconhecido.xlsx"
        );
        assert_eq!(output_filename("a/b", "c:d"), "Pre-pedido-a_b_Sold-c_d.xlsx");
    }

    #[test]
    fn test_unmatched_ids_use_sentinel_in_filename() {
        let order = Order::default();
        let output = assemble(&order, &WorkbookConfig::default()).unwrap();
        assert_eq!(
            output.filename,
            "Pre-pedido-Desconhecido_Sold-Desconhecido.xlsx"
        );
    }

    #[test]
    fn test_header_table_has_nine_rows_in_order() {
        let table = header_table(&sample_order());
        assert_eq!(table.columns, vec!["Campo", "Valor"]);
        assert_eq!(table.rows.len(), 9);
        assert_eq!(table.rows[0], vec!["Pré pedido", "12345"]);
        assert_eq!(table.rows[8], vec!["Valor do pedido", ""]);
    }

    #[test]
    fn test_sheet_layout_offsets() {
        let sheet = build_sheet(&sample_order(), &WorkbookConfig::default());

        let value = |r, c| sheet.get(r, c).map(|cell| cell.value.as_str());
        assert_eq!(value(0, 0), Some("Campo"));
        assert_eq!(value(1, 0), Some("Pré pedido"));
        assert_eq!(value(9, 0), Some("Valor do pedido"));
        // item table starts one row down at column D
        assert_eq!(value(0, 3), None);
        assert_eq!(value(1, 3), Some("Produto"));
        assert_eq!(value(1, 12), Some("Total"));
        assert_eq!(value(2, 3), Some("Produto X"));
        assert_eq!(value(2, 12), Some("R$ 9,00"));
    }

    #[test]
    fn test_assembled_workbook_reads_back() {
        let output = assemble(&sample_order(), &WorkbookConfig::default()).unwrap();
        assert_eq!(output.filename, "Pre-pedido-12345_Sold-678.xlsx");

        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(output.bytes)).unwrap();
        let range = workbook.worksheet_range("Pedido Completo").unwrap();

        let text = |r: u32, c: u32| match range.get_value((r, c)) {
            Some(Data::String(s)) => s.clone(),
            _ => String::new(),
        };
        assert_eq!(text(0, 0), "Campo");
        assert_eq!(text(3, 1), "Maria Souza");
        assert_eq!(text(1, 3), "Produto");
        assert_eq!(text(2, 10), "R$ 10,00");
        assert_eq!(text(2, 11), "R$ 1,00 (10%)");
    }

    #[test]
    fn test_custom_sheet_name_and_origins() {
        let config = WorkbookConfig {
            sheet_name: "Resumo".into(),
            items_origin: (0, 4),
            ..WorkbookConfig::default()
        };
        let sheet = build_sheet(&sample_order(), &config);
        assert_eq!(sheet.name(), "Resumo");
        assert_eq!(sheet.get(0, 4).map(|c| c.value.as_str()), Some("Produto"));
    }

    #[test]
    fn test_items_past_last_row_fail() {
        let config = WorkbookConfig {
            items_origin: (1_048_575, 3),
            ..WorkbookConfig::default()
        };
        let err = assemble(&sample_order(), &config).unwrap_err();
        assert!(matches!(
            err,
            WorkbookError::CellOutOfRange { row: 1_048_576, col: 3 }
        ));
    }
}
