//! Spreadsheet assembly and XLSX output.

mod assemble;
mod xlsx;

pub use assemble::{
    OutputWorkbook, XLSX_MIME, assemble, build_sheet, header_table, items_table, output_filename,
};
pub use xlsx::XlsxWriter;

use std::collections::BTreeMap;

use rust_xlsxwriter::Worksheet;

use crate::error::WorkbookError;

/// Rows in an XLSX worksheet.
pub const MAX_ROWS: u32 = 1_048_576;

/// Columns in an XLSX worksheet.
pub const MAX_COLUMNS: u32 = 16_384;

/// A titled block of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Title row.
    pub columns: Vec<String>,
    /// Data rows; each row is as wide as `columns` or narrower.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of sheet rows the table occupies, title included.
    pub fn height(&self) -> usize {
        self.rows.len() + 1
    }
}

/// A single worksheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub bold: bool,
}

/// A worksheet as a sparse grid of string cells.
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<u32, BTreeMap<u32, Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one cell, replacing whatever was there.
    pub fn set(&mut self, row: u32, col: u32, value: impl Into<String>, bold: bool) {
        self.cells.entry(row).or_default().insert(
            col,
            Cell {
                value: value.into(),
                bold,
            },
        );
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(&row).and_then(|r| r.get(&col))
    }

    /// Place `table` with its title row at `origin` (row, column).
    ///
    /// Positions past `u32::MAX` saturate; the writer rejects anything
    /// outside the worksheet grid.
    pub fn place_table(&mut self, table: &Table, origin: (u32, u32), bold_title: bool) {
        let (top, left) = origin;
        let offset =
            |base: u32, n: usize| base.saturating_add(u32::try_from(n).unwrap_or(u32::MAX));

        for (c, title) in table.columns.iter().enumerate() {
            self.set(top, offset(left, c), title.clone(), bold_title);
        }
        for (r, row) in table.rows.iter().enumerate() {
            let y = offset(top, r).saturating_add(1);
            for (c, value) in row.iter().enumerate() {
                self.set(y, offset(left, c), value.clone(), false);
            }
        }
    }

    /// Rows in ascending order, each with its cells in ascending column order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &BTreeMap<u32, Cell>)> {
        self.cells.iter().map(|(row, cells)| (*row, cells))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Check a sheet name against the XLSX naming rules.
pub fn validate_sheet_name(name: &str) -> Result<(), WorkbookError> {
    let mut worksheet = Worksheet::new();
    worksheet
        .set_name(name)
        .map(|_| ())
        .map_err(|e| WorkbookError::InvalidSheetName {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

/// Check that a block `width` columns by `height` rows fits at `origin`.
pub fn check_block_fits(
    origin: (u32, u32),
    width: usize,
    height: usize,
) -> Result<(), WorkbookError> {
    let (top, left) = origin;
    let last = |base: u32, n: usize| u64::from(base) + n.saturating_sub(1) as u64;
    let (bottom, right) = (last(top, height), last(left, width));

    if bottom >= u64::from(MAX_ROWS) || right >= u64::from(MAX_COLUMNS) {
        return Err(WorkbookError::CellOutOfRange {
            row: u32::try_from(bottom).unwrap_or(u32::MAX),
            col: u32::try_from(right).unwrap_or(u32::MAX),
        });
    }
    Ok(())
}
