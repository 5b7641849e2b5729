//! # sheetml
//!
//! A Rust library for reading SpreadsheetML 2003 workbooks, the XML format
//! Excel writes with "Save As > XML Spreadsheet 2003".
//!
//! ## Features
//!
//! - Single-pass streaming reader with pluggable listeners
//! - Region filtering, so only the rows and columns of interest are reported
//! - Optional reconstruction of the whole workbook model
//! - Document properties, named ranges and worksheet options
//!
//! ## Example
//!
//! ```rust
//! use sheetml::prelude::*;
//!
//! let xml = r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
//!  xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
//!  <Worksheet ss:Name="Prices">
//!   <Table>
//!    <Row><Cell><Data ss:Type="String">Tea</Data></Cell>
//!         <Cell><Data ss:Type="Number">2.5</Data></Cell></Row>
//!   </Table>
//!  </Worksheet>
//! </Workbook>"#;
//!
//! let workbook = Workbook::from_xml_str(xml).unwrap();
//! let sheet = workbook.worksheet_by_name("Prices").unwrap();
//! assert_eq!(sheet.value("B1").as_number(), Some(2.5));
//!
//! // Open a file
//! // let workbook = Workbook::open("report.xml").unwrap();
//! ```

pub mod prelude;

// Re-export model types
pub use sheetml_core::{
    column_label,
    column_number,
    row_number,
    // Coordinates
    Address,
    Area,
    // Cell types
    Cell,
    CellValue,
    Column,
    Comment,
    DataType,
    DocumentProperties,
    // Error types
    Error,
    ExcelWorkbook,
    HeaderFooter,
    Layout,
    Location,
    LocationKind,
    NamedRange,
    PageMargins,
    PageSetup,
    Pane,
    Print,
    Result,
    Row,
    Table,
    // Main types
    Workbook,
    Worksheet,
    WorksheetOptions,
    // Constants
    MAX_COLUMNS,
    MAX_ROWS,
};

// Re-export reader types
pub use sheetml_reader::{
    Fanout, ListenerId, NamespaceMap, ReadError, ReadOptions, ReadResult, ReadScope,
    ReaderListener, SheetAreas, SheetReader, WorkbookAssembler,
};

use std::path::Path;

/// Extension trait for Workbook to add file input
pub trait WorkbookExt {
    /// Open a workbook from a SpreadsheetML file
    fn open<P: AsRef<Path>>(path: P) -> ReadResult<Workbook>;

    /// Open a workbook, keeping only the cells inside `area`
    fn open_area<P: AsRef<Path>>(path: P, area: Area) -> ReadResult<Workbook>;

    /// Read a workbook held in memory
    fn from_xml_str(xml: &str) -> ReadResult<Workbook>;
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> ReadResult<Workbook> {
        SheetReader::new().read_workbook_file(path)
    }

    fn open_area<P: AsRef<Path>>(path: P, area: Area) -> ReadResult<Workbook> {
        SheetReader::with_options(ReadOptions::default().with_area(area)).read_workbook_file(path)
    }

    fn from_xml_str(xml: &str) -> ReadResult<Workbook> {
        SheetReader::new().read_workbook_str(xml)
    }
}
