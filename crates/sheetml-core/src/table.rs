//! Table type - the grid of a worksheet

use std::collections::BTreeMap;

use crate::cell::{Cell, CellValue};
use crate::column::Column;
use crate::coord::{Address, Area};
use crate::row::Row;

/// The `Table` of a worksheet
///
/// Rows and columns are keyed by their reported index. A filtered read can
/// leave gaps, so the maps are sparse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Declared number of columns (`ss:ExpandedColumnCount`)
    pub expanded_column_count: Option<u32>,
    /// Declared number of rows (`ss:ExpandedRowCount`)
    pub expanded_row_count: Option<u32>,
    /// `x:FullColumns`
    pub full_columns: bool,
    /// `x:FullRows`
    pub full_rows: bool,
    /// Style reference (`ss:StyleID`)
    pub style_id: Option<String>,
    /// Default column width in points
    pub default_column_width: Option<f64>,
    /// Default row height in points
    pub default_row_height: Option<f64>,
    /// First visible column (`ss:LeftCell`)
    pub left_cell: Option<u32>,
    /// First visible row (`ss:TopCell`)
    pub top_cell: Option<u32>,
    columns: BTreeMap<u32, Column>,
    rows: BTreeMap<u32, Row>,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row at its own index, returning any row it replaces
    pub fn insert_row(&mut self, row: Row) -> Option<Row> {
        self.rows.insert(row.index, row)
    }

    /// Insert a column at its own index, returning any column it replaces
    pub fn insert_column(&mut self, column: Column) -> Option<Column> {
        self.columns.insert(column.index, column)
    }

    /// Get a row by number
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Get a mutable row by number
    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        self.rows.get_mut(&index)
    }

    /// Get a column by number
    pub fn column(&self, index: u32) -> Option<&Column> {
        self.columns.get(&index)
    }

    /// Find the column description that applies to `column`, honoring spans
    pub fn column_covering(&self, column: u32) -> Option<&Column> {
        self.columns
            .range(..=column)
            .next_back()
            .map(|(_, c)| c)
            .filter(|c| c.covers(column))
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Iterate over columns in order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Row numbers present in the table
    pub fn row_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Number of rows present
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of column descriptions present
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the cell at (`row`, `column`)
    pub fn cell_at(&self, row: u32, column: u32) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.cell(column))
    }

    /// Get the cell at an address
    pub fn cell(&self, addr: &Address) -> Option<&Cell> {
        self.cell_at(addr.row, addr.column)
    }

    /// Value at (`row`, `column`), [`CellValue::Empty`] if there is no cell
    pub fn value_at(&self, row: u32, column: u32) -> CellValue {
        self.cell_at(row, column)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Iterate over every cell with its address, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Address, &Cell)> {
        self.rows.values().flat_map(|row| {
            row.cells()
                .map(move |cell| (Address::new(row.index, cell.index), cell))
        })
    }

    /// The smallest area holding every cell, if there are any
    pub fn used_area(&self) -> Option<Area> {
        self.rows
            .values()
            .filter_map(|row| {
                row.column_bounds()
                    .map(|(first, last)| Area::new(row.index, first, row.index, last))
            })
            .reduce(|acc, span| {
                Area::new(
                    acc.first_row().min(span.first_row()),
                    acc.first_column().min(span.first_column()),
                    acc.last_row().max(span.last_row()),
                    acc.last_column().max(span.last_column()),
                )
            })
    }
}
