//! # sheetml-core
//!
//! Core data structures for the sheetml SpreadsheetML reader.
//!
//! This crate provides the types shared by the reader and its listeners:
//! - [`Address`], [`Area`] and [`Location`] - coordinate algebra and R1C1
//!   reference-string generation
//! - [`Workbook`], [`Worksheet`], [`Table`], [`Row`], [`Column`], [`Cell`] -
//!   the reconstructed document graph
//! - [`CellValue`] - typed cell contents
//!
//! ## Example
//!
//! ```rust
//! use sheetml_core::{Address, Area};
//!
//! let addr = Address::from_label("E11");
//! assert_eq!(addr.row, 11);
//! assert_eq!(addr.column, 5);
//! assert_eq!(addr.absolute_ref(), "R11C5");
//!
//! let area: Area = "H5:C2".parse().unwrap();
//! assert_eq!(area.absolute_ref(), "R2C3:R5C8");
//! ```

pub mod cell;
pub mod column;
pub mod comment;
pub mod coord;
pub mod error;
pub mod named_range;
pub mod properties;
pub mod row;
pub mod table;
pub mod workbook;
pub mod worksheet;
pub mod worksheet_options;

// Re-exports for convenience
pub use cell::{Cell, CellValue, DataType};
pub use column::Column;
pub use comment::Comment;
pub use coord::{column_label, column_number, row_number, Address, Area, Location, LocationKind};
pub use error::{Error, Result};
pub use named_range::NamedRange;
pub use properties::{DocumentProperties, ExcelWorkbook};
pub use row::Row;
pub use table::Table;
pub use workbook::Workbook;
pub use worksheet::Worksheet;
pub use worksheet_options::{
    HeaderFooter, Layout, PageMargins, PageSetup, Pane, Print, WorksheetOptions,
};

/// Maximum number of rows in a SpreadsheetML worksheet
pub const MAX_ROWS: u32 = 65_536;

/// Maximum number of columns in a SpreadsheetML worksheet
pub const MAX_COLUMNS: u32 = 256;
