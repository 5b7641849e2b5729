//! SpreadsheetML reader

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sheetml_core::{Area, Workbook};

use crate::assemble::WorkbookAssembler;
use crate::error::{ReadError, ReadResult};
use crate::listener::{ReadScope, ReaderListener};
use crate::options::ReadOptions;
use crate::session::Session;
use crate::xml::{NamespaceMap, XmlDriver};

/// Handle returned by [`SheetReader::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Streaming SpreadsheetML 2003 reader
///
/// Registered listeners are told about every unit of every read. The model
/// methods (`read_workbook*`) also rebuild a [`Workbook`], appending their
/// own assembler after the registered listeners.
///
/// A reader runs one read at a time; all per-read state is reset when a new
/// read starts.
///
/// ## Example
///
/// ```rust
/// use sheetml_reader::SheetReader;
///
/// let xml = r#"<?xml version="1.0"?>
/// <Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
///  xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
///  <Worksheet ss:Name="Data">
///   <Table>
///    <Row><Cell><Data ss:Type="Number">42</Data></Cell></Row>
///   </Table>
///  </Worksheet>
/// </Workbook>"#;
///
/// let mut reader = SheetReader::new();
/// let workbook = reader.read_workbook_str(xml).unwrap();
/// let sheet = workbook.worksheet_by_name("Data").unwrap();
/// assert_eq!(sheet.value("A1").as_number(), Some(42.0));
/// ```
#[derive(Default)]
pub struct SheetReader {
    options: ReadOptions,
    listeners: Vec<(ListenerId, Box<dyn ReaderListener>)>,
    next_id: usize,
    namespaces: NamespaceMap,
}

impl SheetReader {
    /// Create a reader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with the given options
    pub fn with_options(options: ReadOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Current options
    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    // === Region ===

    /// Restrict later reads to `area`
    pub fn set_read_area(&mut self, area: Area) {
        self.options.area = Some(area);
    }

    /// Restrict later reads to an area label such as `"E11:M16"`
    pub fn set_read_area_label(&mut self, label: &str) -> ReadResult<()> {
        self.options.area = Some(Area::parse(label)?);
        Ok(())
    }

    /// Read whole sheets again
    pub fn clear_read_area(&mut self) {
        self.options.area = None;
    }

    /// The configured area, if any
    pub fn read_area(&self) -> Option<&Area> {
        self.options.area.as_ref()
    }

    // === Listeners ===

    /// Register a listener; listeners are notified in registration order
    pub fn add_listener(&mut self, listener: Box<dyn ReaderListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Unregister a listener, handing it back
    pub fn remove_listener(&mut self, id: ListenerId) -> Option<Box<dyn ReaderListener>> {
        let pos = self.listeners.iter().position(|(i, _)| *i == id)?;
        Some(self.listeners.remove(pos).1)
    }

    /// Unregister all listeners
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Namespaces declared by the last document read
    pub fn namespaces(&self) -> &NamespaceMap {
        &self.namespaces
    }

    // === Event path ===

    /// Read a document, notifying the registered listeners
    pub fn read<R: BufRead>(&mut self, input: R, source: Option<&str>) -> ReadResult<()> {
        self.run(input, source, None)
    }

    /// Read a document, notifying the registered listeners and then `listener`
    pub fn read_with<R: BufRead>(
        &mut self,
        input: R,
        source: Option<&str>,
        listener: &mut dyn ReaderListener,
    ) -> ReadResult<()> {
        self.run(input, source, Some(listener))
    }

    /// Read a file, notifying the registered listeners
    pub fn read_file<P: AsRef<Path>>(&mut self, path: P) -> ReadResult<()> {
        let path = path.as_ref();
        let input = BufReader::new(File::open(path)?);
        self.run(input, Some(&path.to_string_lossy()), None)
    }

    /// Read a document held in memory, notifying the registered listeners
    pub fn read_str(&mut self, xml: &str) -> ReadResult<()> {
        self.run(xml.as_bytes(), None, None)
    }

    // === Model path ===

    /// Read a document into a [`Workbook`]
    pub fn read_workbook<R: BufRead>(
        &mut self,
        input: R,
        source: Option<&str>,
    ) -> ReadResult<Workbook> {
        let mut assembler = WorkbookAssembler::new();
        self.run(input, source, Some(&mut assembler))?;
        assembler
            .into_workbook()
            .ok_or_else(|| ReadError::Markup("document produced no workbook".into()))
    }

    /// Read a file into a [`Workbook`]
    pub fn read_workbook_file<P: AsRef<Path>>(&mut self, path: P) -> ReadResult<Workbook> {
        let path = path.as_ref();
        let input = BufReader::new(File::open(path)?);
        self.read_workbook(input, Some(&path.to_string_lossy()))
    }

    /// Read a document held in memory into a [`Workbook`]
    pub fn read_workbook_str(&mut self, xml: &str) -> ReadResult<Workbook> {
        self.read_workbook(xml.as_bytes(), None)
    }

    fn run<R: BufRead>(
        &mut self,
        input: R,
        source: Option<&str>,
        extra: Option<&mut dyn ReaderListener>,
    ) -> ReadResult<()> {
        self.namespaces = NamespaceMap::default();

        let mut listeners: Vec<&mut dyn ReaderListener> =
            Vec::with_capacity(self.listeners.len() + 1);
        for (_, listener) in self.listeners.iter_mut() {
            listeners.push(listener.as_mut());
        }
        if let Some(extra) = extra {
            listeners.push(extra);
        }

        let scope = ReadScope::new(source.map(str::to_string), self.options.area);
        let mut session = Session::new(scope, listeners);
        let mut driver = XmlDriver::new(input, self.options.trim_text);
        let result = driver.drive(&mut session);

        self.namespaces = driver.into_namespaces();
        result
    }
}
