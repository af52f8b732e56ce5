//! Error types for the pedido-core library.

use thiserror::Error;

/// Main error type for the pedido library.
#[derive(Error, Debug)]
pub enum PedidoError {
    /// The input could not be read as a page-oriented document with text.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// The output workbook could not be written.
    #[error("workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while opening a document and reading its text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to open/parse the PDF.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted with a non-empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Text was requested before a document was loaded.
    #[error("no document loaded")]
    NotLoaded,
}

/// Errors raised while writing the XLSX package.
#[derive(Error, Debug)]
pub enum WorkbookError {
    /// Error reported by the XLSX writer.
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Sheet name rejected by the spreadsheet format.
    #[error("invalid sheet name {name:?}: {reason}")]
    InvalidSheetName { name: String, reason: String },

    /// A cell lies outside the worksheet grid.
    #[error("cell (row {row}, column {col}) is outside the worksheet")]
    CellOutOfRange { row: u32, col: u32 },
}

/// Result type for the pedido library.
pub type Result<T> = std::result::Result<T, PedidoError>;
