//! End-to-end conversion: document bytes in, workbook bytes out.

use tracing::{info, warn};

use crate::error::Result;
use crate::models::config::PedidoConfig;
use crate::models::order::Order;
use crate::order::{LayoutParser, OrderParser};
use crate::pdf::{PdfExtractor, PdfProcessor};
use crate::workbook::assemble;

/// Outcome of converting one order document.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// XLSX bytes.
    pub workbook: Vec<u8>,
    /// Derived output file name.
    pub filename: String,
    /// Extracted order data.
    pub order: Order,
    /// Non-fatal problems found on the way.
    pub warnings: Vec<String>,
}

/// Convert the bytes of an order PDF.
///
/// Only an unreadable document or a failed workbook write is an error;
/// fields and items that cannot be found are reported as warnings.
pub fn convert_pdf(data: &[u8], config: &PedidoConfig) -> Result<Conversion> {
    let mut extractor =
        PdfExtractor::new().with_empty_password_decryption(config.pdf.decrypt_empty_password);
    extractor.load(data)?;
    let text = extractor.extract_text()?;

    info!(
        "Extracted {} characters from {} pages",
        text.chars().count(),
        extractor.page_count()
    );

    let mut conversion = convert_text(&text, config)?;

    if text.trim().chars().count() < config.pdf.min_text_length {
        let message = format!(
            "Document has very little text ({} characters); it may be a scanned image",
            text.trim().chars().count()
        );
        warn!("{}", message);
        conversion.warnings.insert(0, message);
    }

    Ok(conversion)
}

/// Convert already extracted document text.
pub fn convert_text(text: &str, config: &PedidoConfig) -> Result<Conversion> {
    let result = LayoutParser::new()
        .with_sentinel(config.layout.sentinel.clone())
        .parse(text);

    for warning in &result.warnings {
        warn!("{}", warning);
    }

    let output = assemble(&result.order, &config.workbook)?;

    Ok(Conversion {
        workbook: output.bytes,
        filename: output.filename,
        order: result.order,
        warnings: result.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DocumentError, PedidoError};
    use crate::models::order::HeaderLabel;
    use crate::test_support::{make_encrypted_pdf, make_pdf, make_pdf_without_resources};
    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const ORDER_TEXT: &str = "Pré pedido 12345\nSold 678\nVendedor Maria Souza\n\
        Data/Hora 12/03/2024 14:35\nEntrega estimada 20/03/2024\nData da price 01/03/2024\n\
        Total de itens 2\nC. Pagamento 30 dias boleto\nValor do pedido R$ 1.234,56\n\
        Itens do pedido\n\
        Cafe Torrado 500g\nSKU: 1001 EAN: 7891000100103 Caixa: 12un Peso: 6kg \
        Qtd. Unidade: 24 Qtd. Inteira: 2 Valor unitário: R$ 15,90 \
        Desconto: R$ 1,59 (10%) Total: R$ 343,44\n\
        Acucar Refinado 1kg\nSKU: 2002 EAN: 7891000200204 Caixa: 10un Peso: 10kg \
        Qtd. Unidade: 10 Qtd. Inteira: 1 Valor unitário: R$ 4,50 \
        Desconto: R$ 0,00 (0%) Total: R$ 45,00";

    #[test]
    fn test_convert_text_full_order() {
        let conversion = convert_text(ORDER_TEXT, &PedidoConfig::default()).unwrap();

        assert_eq!(conversion.filename, "Pre-pedido-12345_Sold-678.xlsx");
        assert!(conversion.warnings.is_empty(), "{:?}", conversion.warnings);
        assert_eq!(conversion.order.items.len(), 2);
        assert_eq!(
            conversion.order.header.get(HeaderLabel::CondicaoPagamento),
            Some("30 dias boleto")
        );

        let mut workbook: Xlsx<_> =
            open_workbook_from_rs(Cursor::new(conversion.workbook)).unwrap();
        let range = workbook.worksheet_range("Pedido Completo").unwrap();
        assert_eq!(
            range.get_value((9, 1)),
            Some(&Data::String("1.234,56".into()))
        );
        assert_eq!(
            range.get_value((3, 3)),
            Some(&Data::String("Acucar Refinado 1kg".into()))
        );
    }

    #[test]
    fn test_convert_text_without_matches_still_writes_workbook() {
        let conversion = convert_text("nada aqui", &PedidoConfig::default()).unwrap();

        assert_eq!(
            conversion.filename,
            "Pre-pedido-Desconhecido_Sold-Desconhecido.xlsx"
        );
        assert!(conversion.order.items.is_empty());
        assert!(!conversion.workbook.is_empty());
        assert!(!conversion.warnings.is_empty());
    }

    #[test]
    fn test_convert_pdf_extracts_sold() {
        let pdf = make_pdf(&[&["Sold 42", "Vendedor Joao Silva"]]);
        let conversion = convert_pdf(&pdf, &PedidoConfig::default()).unwrap();

        assert_eq!(conversion.order.header.sold, "42");
        assert_eq!(conversion.filename, "Pre-pedido-Desconhecido_Sold-42.xlsx");
        assert!(
            conversion
                .warnings
                .iter()
                .any(|w| w.contains("scanned image"))
        );
    }

    #[test]
    fn test_convert_pdf_rejects_non_pdf() {
        let err = convert_pdf(b"not a pdf", &PedidoConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PedidoError::Document(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn test_convert_pdf_reports_extractor_failure() {
        let pdf = make_pdf_without_resources(&["Sold 42"]);
        let err = convert_pdf(&pdf, &PedidoConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            PedidoError::Document(DocumentError::TextExtraction(_))
        ));
    }

    #[test]
    fn test_convert_pdf_honours_decryption_setting() {
        let pdf = make_encrypted_pdf(&["Sold 42"]);

        let conversion = convert_pdf(&pdf, &PedidoConfig::default()).unwrap();
        assert_eq!(conversion.order.header.sold, "42");

        let mut config = PedidoConfig::default();
        config.pdf.decrypt_empty_password = false;
        let err = convert_pdf(&pdf, &config).unwrap_err();
        assert!(matches!(
            err,
            PedidoError::Document(DocumentError::Encrypted)
        ));
    }
}
