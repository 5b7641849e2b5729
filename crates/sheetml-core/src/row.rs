//! Row types

use std::collections::BTreeMap;

use crate::cell::Cell;

/// A row of a table, holding its cells keyed by column number
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row number (1-based)
    pub index: u32,
    /// Whether the index came from an `ss:Index` attribute
    pub explicit_index: bool,
    /// Custom height in points (None = default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Height adjusts to content (`ss:AutoFitHeight`)
    pub auto_fit_height: Option<bool>,
    /// Style reference (`ss:StyleID`)
    pub style_id: Option<String>,
    /// Number of following rows sharing this description (`ss:Span`)
    pub span: u32,
    cells: BTreeMap<u32, Cell>,
}

impl Row {
    /// Create a new row with default settings
    pub fn new(index: u32) -> Self {
        Self {
            index,
            explicit_index: false,
            height: None,
            hidden: false,
            auto_fit_height: None,
            style_id: None,
            span: 0,
            cells: BTreeMap::new(),
        }
    }

    /// Check if the index was given explicitly
    pub fn is_index_explicit(&self) -> bool {
        self.explicit_index
    }

    /// Insert a cell at its own index, returning any cell it replaces
    pub fn insert_cell(&mut self, cell: Cell) -> Option<Cell> {
        self.cells.insert(cell.index, cell)
    }

    /// Get a cell by column number
    pub fn cell(&self, column: u32) -> Option<&Cell> {
        self.cells.get(&column)
    }

    /// Get a mutable cell by column number
    pub fn cell_mut(&mut self, column: u32) -> Option<&mut Cell> {
        self.cells.get_mut(&column)
    }

    /// Iterate over cells in column order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Column numbers of the first and last cells, if any
    pub fn column_bounds(&self) -> Option<(u32, u32)> {
        let first = self.cells.keys().next()?;
        let last = self.cells.values().next_back()?;
        Some((*first, last.last_column()))
    }

    /// Check if this row has any custom settings
    pub fn has_custom_settings(&self) -> bool {
        self.height.is_some()
            || self.hidden
            || self.auto_fit_height.is_some()
            || self.style_id.is_some()
            || self.span > 0
    }
}
