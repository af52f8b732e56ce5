//! Configuration structures for the conversion pipeline.

use serde::{Deserialize, Serialize};

use super::order::{HeaderLabel, LineItem, SENTINEL};
use crate::error::{PedidoError, Result};
use crate::workbook::{check_block_fits, validate_sheet_name};

/// Main configuration for the pedido pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PedidoConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Field extraction configuration.
    pub layout: LayoutConfig,

    /// Output workbook configuration.
    pub workbook: WorkbookConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Open documents encrypted with an empty user password.
    pub decrypt_empty_password: bool,

    /// Below this many characters of text the document is probably a scan.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            min_text_length: 50,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Stand-in for an unmatched pre-order or sold-to number in the filename.
    pub sentinel: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sentinel: SENTINEL.to_string(),
        }
    }
}

/// Output workbook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbookConfig {
    /// Name of the single worksheet.
    pub sheet_name: String,

    /// Top-left cell (row, column) of the header table, zero-based.
    pub header_origin: (u32, u32),

    /// Top-left cell (row, column) of the item table, zero-based.
    pub items_origin: (u32, u32),

    /// Render table title rows in bold.
    pub bold_headers: bool,

    /// Creator recorded in the document properties.
    pub creator: String,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Pedido Completo".to_string(),
            header_origin: (0, 0),
            items_origin: (1, 3),
            bold_headers: true,
            creator: "pedido".to_string(),
        }
    }
}

impl PedidoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| PedidoError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| PedidoError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values the writer would otherwise reject late.
    pub fn validate(&self) -> Result<()> {
        let workbook = &self.workbook;
        validate_sheet_name(&workbook.sheet_name)
            .map_err(|e| PedidoError::Config(e.to_string()))?;

        // Campo/Valor block: title plus one row per label
        check_block_fits(workbook.header_origin, 2, HeaderLabel::ALL.len() + 1)
            .map_err(|e| PedidoError::Config(format!("header_origin: {}", e)))?;
        check_block_fits(workbook.items_origin, LineItem::COLUMNS.len(), 1)
            .map_err(|e| PedidoError::Config(format!("items_origin: {}", e)))?;

        if self.layout.sentinel.is_empty() {
            return Err(PedidoError::Config("sentinel must not be empty".into()));
        }
        Ok(())
    }
}
