//! Listener interface for completed units
//!
//! A [`ReaderListener`] is told about every structural unit once the reader
//! has finished building it. All methods default to doing nothing, so a
//! listener only implements what it cares about. Each callback receives the
//! [`ReadScope`] of the read, which names the current sheet and row and lets
//! the listener narrow or widen the region for the units that follow.

use std::collections::HashMap;

use sheetml_core::{
    Area, Cell, Column, DocumentProperties, ExcelWorkbook, NamedRange, Row, Table, Worksheet,
    WorksheetOptions,
};

use crate::error::ReadResult;
use crate::xml::NamespaceMap;

/// Position and region state of a running read
#[derive(Debug, Clone, Default)]
pub struct ReadScope {
    source: Option<String>,
    sheet_index: Option<usize>,
    sheet_name: Option<String>,
    row_index: Option<u32>,
    area: Option<Area>,
    base_area: Option<Area>,
}

impl ReadScope {
    pub(crate) fn new(source: Option<String>, area: Option<Area>) -> Self {
        Self {
            source,
            area,
            base_area: area,
            ..Default::default()
        }
    }

    /// Identifier of the document being read (usually its path)
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// 0-based index of the current worksheet
    pub fn sheet_index(&self) -> Option<usize> {
        self.sheet_index
    }

    /// Name of the current worksheet
    pub fn sheet_name(&self) -> Option<&str> {
        self.sheet_name.as_deref()
    }

    /// Number of the current row
    pub fn row_index(&self) -> Option<u32> {
        self.row_index
    }

    /// The region in effect; the full sheet when none is set
    pub fn area(&self) -> Area {
        self.area.unwrap_or_else(Area::sheet_bounds)
    }

    /// The region explicitly set, if any
    pub fn configured_area(&self) -> Option<&Area> {
        self.area.as_ref()
    }

    /// Restrict the units that follow to `area`
    pub fn set_area(&mut self, area: Area) {
        self.area = Some(area);
    }

    /// The region the read was started with
    pub fn base_area(&self) -> Option<&Area> {
        self.base_area.as_ref()
    }

    /// Go back to the region the read was started with
    pub fn reset_area(&mut self) {
        self.area = self.base_area;
    }

    /// Read the whole sheet from here on
    pub fn clear_area(&mut self) {
        self.area = None;
    }

    /// Check a row number against the region's row band
    pub fn includes_row(&self, row: u32) -> bool {
        self.area.map_or(true, |a| a.contains_row(row))
    }

    /// Check a column number against the region's column band
    pub fn includes_column(&self, column: u32) -> bool {
        self.area.map_or(true, |a| a.contains_column(column))
    }

    pub(crate) fn enter_sheet(&mut self, index: usize, name: &str) {
        self.sheet_index = Some(index);
        self.sheet_name = Some(name.to_string());
        self.row_index = None;
    }

    pub(crate) fn leave_sheet(&mut self) {
        self.sheet_index = None;
        self.sheet_name = None;
        self.row_index = None;
    }

    pub(crate) fn enter_row(&mut self, index: u32) {
        self.row_index = Some(index);
    }

    pub(crate) fn leave_row(&mut self) {
        self.row_index = None;
    }
}

/// Receiver of completed units during a read
///
/// Returning an error from any method aborts the read.
#[allow(unused_variables)]
pub trait ReaderListener {
    /// The document started
    fn start_document(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        Ok(())
    }

    /// `o:DocumentProperties` was read
    fn document_properties(
        &mut self,
        scope: &mut ReadScope,
        properties: &DocumentProperties,
    ) -> ReadResult<()> {
        Ok(())
    }

    /// `x:ExcelWorkbook` was read
    fn excel_workbook(
        &mut self,
        scope: &mut ReadScope,
        settings: &ExcelWorkbook,
    ) -> ReadResult<()> {
        Ok(())
    }

    /// A named range was read; it is sheet-scoped when
    /// [`ReadScope::sheet_index`] is set
    fn named_range(&mut self, scope: &mut ReadScope, range: &NamedRange) -> ReadResult<()> {
        Ok(())
    }

    /// A worksheet started; the sheet carries its attributes only
    fn start_worksheet(&mut self, scope: &mut ReadScope, sheet: &Worksheet) -> ReadResult<()> {
        Ok(())
    }

    /// The sheet's table started; the table carries its attributes only
    fn start_table(&mut self, scope: &mut ReadScope, table: &Table) -> ReadResult<()> {
        Ok(())
    }

    /// A column description inside the region was read
    fn column(&mut self, scope: &mut ReadScope, column: &Column) -> ReadResult<()> {
        Ok(())
    }

    /// A row inside the region was read, together with its included cells
    fn row(&mut self, scope: &mut ReadScope, row: &Row) -> ReadResult<()> {
        Ok(())
    }

    /// A cell inside the region was read; called before its row
    fn cell(&mut self, scope: &mut ReadScope, cell: &Cell) -> ReadResult<()> {
        Ok(())
    }

    /// `x:WorksheetOptions` of the current sheet was read
    fn worksheet_options(
        &mut self,
        scope: &mut ReadScope,
        options: &WorksheetOptions,
    ) -> ReadResult<()> {
        Ok(())
    }

    /// `x:AutoFilter` of the current sheet was read
    fn auto_filter(&mut self, scope: &mut ReadScope, range: &str) -> ReadResult<()> {
        Ok(())
    }

    /// The current worksheet ended
    fn end_worksheet(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        Ok(())
    }

    /// The document ended
    fn end_document(&mut self, scope: &mut ReadScope, namespaces: &NamespaceMap) -> ReadResult<()> {
        Ok(())
    }
}

/// A listener that republishes every unit to its own listeners, in order
#[derive(Default)]
pub struct Fanout {
    listeners: Vec<Box<dyn ReaderListener>>,
}

impl Fanout {
    /// Create an empty fanout
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener, builder style
    pub fn with<L: ReaderListener + 'static>(mut self, listener: L) -> Self {
        self.push(listener);
        self
    }

    /// Add a listener
    pub fn push<L: ReaderListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if there are no listeners
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn each<F>(&mut self, mut notify: F) -> ReadResult<()>
    where
        F: FnMut(&mut dyn ReaderListener) -> ReadResult<()>,
    {
        for listener in self.listeners.iter_mut() {
            notify(listener.as_mut())?;
        }
        Ok(())
    }
}

impl ReaderListener for Fanout {
    fn start_document(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        self.each(|l| l.start_document(scope))
    }

    fn document_properties(
        &mut self,
        scope: &mut ReadScope,
        properties: &DocumentProperties,
    ) -> ReadResult<()> {
        self.each(|l| l.document_properties(scope, properties))
    }

    fn excel_workbook(&mut self, scope: &mut ReadScope, settings: &ExcelWorkbook) -> ReadResult<()> {
        self.each(|l| l.excel_workbook(scope, settings))
    }

    fn named_range(&mut self, scope: &mut ReadScope, range: &NamedRange) -> ReadResult<()> {
        self.each(|l| l.named_range(scope, range))
    }

    fn start_worksheet(&mut self, scope: &mut ReadScope, sheet: &Worksheet) -> ReadResult<()> {
        self.each(|l| l.start_worksheet(scope, sheet))
    }

    fn start_table(&mut self, scope: &mut ReadScope, table: &Table) -> ReadResult<()> {
        self.each(|l| l.start_table(scope, table))
    }

    fn column(&mut self, scope: &mut ReadScope, column: &Column) -> ReadResult<()> {
        self.each(|l| l.column(scope, column))
    }

    fn row(&mut self, scope: &mut ReadScope, row: &Row) -> ReadResult<()> {
        self.each(|l| l.row(scope, row))
    }

    fn cell(&mut self, scope: &mut ReadScope, cell: &Cell) -> ReadResult<()> {
        self.each(|l| l.cell(scope, cell))
    }

    fn worksheet_options(
        &mut self,
        scope: &mut ReadScope,
        options: &WorksheetOptions,
    ) -> ReadResult<()> {
        self.each(|l| l.worksheet_options(scope, options))
    }

    fn auto_filter(&mut self, scope: &mut ReadScope, range: &str) -> ReadResult<()> {
        self.each(|l| l.auto_filter(scope, range))
    }

    fn end_worksheet(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        self.each(|l| l.end_worksheet(scope))
    }

    fn end_document(&mut self, scope: &mut ReadScope, namespaces: &NamespaceMap) -> ReadResult<()> {
        self.each(|l| l.end_document(scope, namespaces))
    }
}

/// A listener that sets the region per worksheet name before passing units on
///
/// Sheets without an entry get the fallback area, or the area the read was
/// configured with when there is no fallback.
///
/// ```
/// use sheetml_core::Area;
/// use sheetml_reader::{SheetAreas, SheetReader};
///
/// let areas = SheetAreas::new()
///     .area("Summary", Area::parse("A1:D10").unwrap())
///     .fallback(Area::parse("A1:A1").unwrap());
///
/// let mut reader = SheetReader::new();
/// reader.add_listener(Box::new(areas));
/// ```
#[derive(Default)]
pub struct SheetAreas {
    areas: HashMap<String, Area>,
    fallback: Option<Area>,
    inner: Fanout,
}

impl SheetAreas {
    /// Create a decorator with no per-sheet areas
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `area` for the sheet called `sheet`
    pub fn area<S: Into<String>>(mut self, sheet: S, area: Area) -> Self {
        self.areas.insert(sheet.into(), area);
        self
    }

    /// Use `area` for every sheet without its own entry
    pub fn fallback(mut self, area: Area) -> Self {
        self.fallback = Some(area);
        self
    }

    /// Pass units on to `listener` after the area is set
    pub fn listener<L: ReaderListener + 'static>(mut self, listener: L) -> Self {
        self.inner.push(listener);
        self
    }

    fn area_for(&self, sheet: &str) -> Option<Area> {
        self.areas.get(sheet).copied().or(self.fallback)
    }
}

impl ReaderListener for SheetAreas {
    fn start_document(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        self.inner.start_document(scope)
    }

    fn document_properties(
        &mut self,
        scope: &mut ReadScope,
        properties: &DocumentProperties,
    ) -> ReadResult<()> {
        self.inner.document_properties(scope, properties)
    }

    fn excel_workbook(&mut self, scope: &mut ReadScope, settings: &ExcelWorkbook) -> ReadResult<()> {
        self.inner.excel_workbook(scope, settings)
    }

    fn named_range(&mut self, scope: &mut ReadScope, range: &NamedRange) -> ReadResult<()> {
        self.inner.named_range(scope, range)
    }

    fn start_worksheet(&mut self, scope: &mut ReadScope, sheet: &Worksheet) -> ReadResult<()> {
        match self.area_for(sheet.name()) {
            Some(area) => scope.set_area(area),
            None => scope.reset_area(),
        }
        self.inner.start_worksheet(scope, sheet)
    }

    fn start_table(&mut self, scope: &mut ReadScope, table: &Table) -> ReadResult<()> {
        self.inner.start_table(scope, table)
    }

    fn column(&mut self, scope: &mut ReadScope, column: &Column) -> ReadResult<()> {
        self.inner.column(scope, column)
    }

    fn row(&mut self, scope: &mut ReadScope, row: &Row) -> ReadResult<()> {
        self.inner.row(scope, row)
    }

    fn cell(&mut self, scope: &mut ReadScope, cell: &Cell) -> ReadResult<()> {
        self.inner.cell(scope, cell)
    }

    fn worksheet_options(
        &mut self,
        scope: &mut ReadScope,
        options: &WorksheetOptions,
    ) -> ReadResult<()> {
        self.inner.worksheet_options(scope, options)
    }

    fn auto_filter(&mut self, scope: &mut ReadScope, range: &str) -> ReadResult<()> {
        self.inner.auto_filter(scope, range)
    }

    fn end_worksheet(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        self.inner.end_worksheet(scope)
    }

    fn end_document(&mut self, scope: &mut ReadScope, namespaces: &NamespaceMap) -> ReadResult<()> {
        self.inner.end_document(scope, namespaces)
    }
}
