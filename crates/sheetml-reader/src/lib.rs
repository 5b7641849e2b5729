//! # sheetml-reader
//!
//! Streaming reader for SpreadsheetML 2003 ("XML Spreadsheet") documents.
//!
//! The reader makes a single pass over the markup and reconstructs each
//! worksheet, row, column and cell as its element closes. Finished units are
//! handed to [`ReaderListener`]s; the `read_workbook*` methods additionally
//! rebuild a [`sheetml_core::Workbook`].
//!
//! Reading can be restricted to a rectangular region. Rows outside the
//! region's row band and columns or cells outside its column band are
//! skipped without being built.
//!
//! ```rust
//! use sheetml_reader::SheetReader;
//!
//! let xml = r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
//!  xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
//!  <Worksheet ss:Name="S"><Table>
//!   <Row><Cell><Data ss:Type="String">a</Data></Cell><Cell><Data ss:Type="String">b</Data></Cell></Row>
//!   <Row><Cell><Data ss:Type="String">c</Data></Cell><Cell><Data ss:Type="String">d</Data></Cell></Row>
//!  </Table></Worksheet>
//! </Workbook>"#;
//!
//! let mut reader = SheetReader::new();
//! reader.set_read_area_label("B2:B2").unwrap();
//! let workbook = reader.read_workbook_str(xml).unwrap();
//! let table = workbook.worksheet(0).unwrap().table().unwrap();
//!
//! assert_eq!(table.row_count(), 1);
//! assert_eq!(table.value_at(2, 2).as_str(), Some("d"));
//! assert!(table.cell_at(2, 1).is_none());
//! ```

mod assemble;
mod bind;
mod builder;
pub mod error;
pub mod listener;
pub mod options;
mod reader;
mod session;
pub mod xml;

pub use assemble::WorkbookAssembler;
pub use error::{ReadError, ReadResult};
pub use listener::{Fanout, ReadScope, ReaderListener, SheetAreas};
pub use options::ReadOptions;
pub use reader::{ListenerId, SheetReader};
pub use xml::{Attributes, ContentHandler, ElementName, NamespaceMap, XmlDriver};
