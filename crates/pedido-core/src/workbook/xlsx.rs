//! XLSX output through rust_xlsxwriter.
//!
//! Writes a single-sheet workbook of string cells, with bold table titles.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{ColNum, DocProperties, Format, Workbook};
use tracing::debug;

use super::{MAX_COLUMNS, MAX_ROWS, Sheet, validate_sheet_name};
use crate::error::WorkbookError;

type Result<T> = std::result::Result<T, WorkbookError>;

/// XLSX package writer.
#[derive(Debug, Clone)]
pub struct XlsxWriter {
    creator: String,
    created: DateTime<Utc>,
}

impl XlsxWriter {
    /// Create a writer stamping the current time.
    pub fn new() -> Self {
        Self {
            creator: "pedido".to_string(),
            created: Utc::now(),
        }
    }

    /// Set the creator recorded in the document properties.
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    /// Pin the creation timestamp.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Serialize `sheet` into XLSX bytes.
    pub fn write(&self, sheet: &Sheet) -> Result<Vec<u8>> {
        validate_sheet_name(sheet.name())?;

        let mut workbook = Workbook::new();
        let properties = DocProperties::new()
            .set_author(&self.creator)
            .set_creation_datetime(&self.created);
        workbook.set_properties(&properties);

        let bold = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name())?;

        for (row, cells) in sheet.rows() {
            for (&col, cell) in cells {
                if row >= MAX_ROWS || col >= MAX_COLUMNS {
                    return Err(WorkbookError::CellOutOfRange { row, col });
                }
                let col_num =
                    ColNum::try_from(col).map_err(|_| WorkbookError::CellOutOfRange { row, col })?;

                // Empty strings are left as blank cells
                if cell.value.is_empty() {
                    continue;
                }
                if cell.bold {
                    worksheet.write_string_with_format(row, col_num, &cell.value, &bold)?;
                } else {
                    worksheet.write_string(row, col_num, &cell.value)?;
                }
            }
        }

        let bytes = workbook.save_to_buffer()?;
        debug!("Wrote workbook {:?}: {} bytes", sheet.name(), bytes.len());
        Ok(bytes)
    }
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self::new()
    }
}
