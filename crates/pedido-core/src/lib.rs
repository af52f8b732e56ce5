//! Core library for purchase-order PDF to spreadsheet conversion.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Rule-based extraction of the order header and line items
//! - XLSX workbook assembly with a derived output file name

pub mod convert;
pub mod error;
pub mod models;
pub mod order;
pub mod pdf;
pub mod workbook;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use convert::{Conversion, convert_pdf, convert_text};
pub use error::{DocumentError, PedidoError, Result, WorkbookError};
pub use models::config::PedidoConfig;
pub use models::order::{HeaderField, HeaderLabel, LineItem, Order, OrderHeader, SENTINEL};
pub use order::{ExtractionResult, LayoutParser, OrderLayout, OrderParser, PreOrderLayout};
pub use pdf::{PdfExtractor, PdfProcessor, extract_document_text};
pub use workbook::{OutputWorkbook, XLSX_MIME, XlsxWriter, assemble, output_filename};
