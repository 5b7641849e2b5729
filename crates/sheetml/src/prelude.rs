//! Prelude module - common imports for sheetml users
//!
//! ```rust
//! use sheetml::prelude::*;
//! ```

pub use crate::{
    // Coordinates
    Address,
    Area,
    // Cell types
    Cell,
    CellValue,
    DataType,
    // Error types
    Error,
    ReadError,
    ReadResult,
    // Reading
    ReadOptions,
    ReadScope,
    ReaderListener,
    Result,
    SheetReader,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    Worksheet,
};
