//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - a reconstructed `Cell` element with its attributes
//! - [`CellValue`] - the value of its `Data` child
//! - [`DataType`] - the `ss:Type` vocabulary

mod value;

pub use value::{CellValue, DataType};

use crate::comment::Comment;

/// A cell of a row
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Column number (1-based)
    pub index: u32,
    /// Whether the index came from an `ss:Index` attribute rather than from
    /// the previous cell
    pub explicit_index: bool,
    /// Style reference (`ss:StyleID`)
    pub style_id: Option<String>,
    /// R1C1 formula (`ss:Formula`)
    pub formula: Option<String>,
    /// Array formula range (`ss:ArrayRange`)
    pub array_range: Option<String>,
    /// Hyperlink target (`ss:HRef`)
    pub href: Option<String>,
    /// Hyperlink tooltip (`x:HRefScreenTip`)
    pub href_screen_tip: Option<String>,
    /// Number of extra columns merged to the right (`ss:MergeAcross`)
    pub merge_across: u32,
    /// Number of extra rows merged below (`ss:MergeDown`)
    pub merge_down: u32,
    /// Cell value
    pub value: CellValue,
    /// Attached comment
    pub comment: Option<Comment>,
    /// Names this cell belongs to (`NamedCell` children)
    pub named_cells: Vec<String>,
}

impl Cell {
    /// Create an empty cell at a column
    pub fn new(index: u32) -> Self {
        Self {
            index,
            explicit_index: false,
            style_id: None,
            formula: None,
            array_range: None,
            href: None,
            href_screen_tip: None,
            merge_across: 0,
            merge_down: 0,
            value: CellValue::Empty,
            comment: None,
            named_cells: Vec::new(),
        }
    }

    /// Create a cell holding a value
    pub fn with_value<V: Into<CellValue>>(index: u32, value: V) -> Self {
        Self {
            value: value.into(),
            ..Self::new(index)
        }
    }

    /// Check if the index was given explicitly
    pub fn is_index_explicit(&self) -> bool {
        self.explicit_index
    }

    /// Last column covered by this cell, including merged columns
    pub fn last_column(&self) -> u32 {
        self.index.saturating_add(self.merge_across)
    }

    /// Check if the cell carries a formula
    pub fn has_formula(&self) -> bool {
        self.formula.is_some()
    }
}
