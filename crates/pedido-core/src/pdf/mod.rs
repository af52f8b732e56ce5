//! PDF text extraction.

mod extractor;

pub use extractor::{PdfExtractor, extract_document_text};

use crate::error::DocumentError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Separator placed between consecutive page texts.
pub const PAGE_SEPARATOR: &str = "\n";

/// Trait for page-oriented document readers.
pub trait PdfProcessor {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract the text of every page, in page order.
    fn page_texts(&self) -> Result<Vec<String>>;

    /// Extract the text of the whole document as one flat string.
    fn extract_text(&self) -> Result<String> {
        Ok(self.page_texts()?.join(PAGE_SEPARATOR))
    }
}
