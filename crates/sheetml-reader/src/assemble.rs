//! Listener that reassembles the document graph

use sheetml_core::{
    Column, DocumentProperties, ExcelWorkbook, NamedRange, Row, Table, Workbook, Worksheet,
    WorksheetOptions,
};

use crate::error::ReadResult;
use crate::listener::{ReadScope, ReaderListener};

/// Builds a [`Workbook`] from the units of a read
///
/// Cells arrive inside their rows, so the assembler ignores the separate
/// cell callbacks.
#[derive(Debug, Default)]
pub struct WorkbookAssembler {
    workbook: Option<Workbook>,
    current: Option<usize>,
}

impl WorkbookAssembler {
    /// Create an assembler with nothing read yet
    pub fn new() -> Self {
        Self::default()
    }

    /// The workbook read so far
    pub fn workbook(&self) -> Option<&Workbook> {
        self.workbook.as_ref()
    }

    /// Take the finished workbook
    pub fn into_workbook(self) -> Option<Workbook> {
        self.workbook
    }

    fn workbook_mut(&mut self) -> &mut Workbook {
        self.workbook.get_or_insert_with(Workbook::new)
    }

    fn sheet_mut(&mut self) -> Option<&mut Worksheet> {
        let index = self.current?;
        self.workbook.as_mut()?.worksheet_mut(index)
    }
}

/// Workbook name from a source path: last segment up to the first `.`
pub(crate) fn workbook_name(source: &str) -> &str {
    let file = source
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(source);
    file.split('.').next().unwrap_or(file)
}

impl ReaderListener for WorkbookAssembler {
    fn start_document(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        let mut workbook = Workbook::new();
        if let Some(source) = scope.source() {
            workbook.set_name(workbook_name(source));
            workbook.set_file_name(source);
        }
        self.workbook = Some(workbook);
        self.current = None;
        Ok(())
    }

    fn document_properties(
        &mut self,
        _scope: &mut ReadScope,
        properties: &DocumentProperties,
    ) -> ReadResult<()> {
        self.workbook_mut().set_properties(properties.clone());
        Ok(())
    }

    fn excel_workbook(
        &mut self,
        _scope: &mut ReadScope,
        settings: &ExcelWorkbook,
    ) -> ReadResult<()> {
        self.workbook_mut().set_excel_workbook(settings.clone());
        Ok(())
    }

    fn named_range(&mut self, scope: &mut ReadScope, range: &NamedRange) -> ReadResult<()> {
        if scope.sheet_index().is_some() {
            if let Some(sheet) = self.sheet_mut() {
                sheet.add_named_range(range.clone());
                return Ok(());
            }
        }
        self.workbook_mut().add_named_range(range.clone());
        Ok(())
    }

    fn start_worksheet(&mut self, _scope: &mut ReadScope, sheet: &Worksheet) -> ReadResult<()> {
        let index = self.workbook_mut().add_worksheet(sheet.clone())?;
        self.current = Some(index);
        Ok(())
    }

    fn start_table(&mut self, _scope: &mut ReadScope, table: &Table) -> ReadResult<()> {
        if let Some(sheet) = self.sheet_mut() {
            if !sheet.has_table() {
                sheet.set_table(table.clone());
            }
        }
        Ok(())
    }

    fn column(&mut self, _scope: &mut ReadScope, column: &Column) -> ReadResult<()> {
        if let Some(sheet) = self.sheet_mut() {
            sheet.table_or_default().insert_column(column.clone());
        }
        Ok(())
    }

    fn row(&mut self, _scope: &mut ReadScope, row: &Row) -> ReadResult<()> {
        if let Some(sheet) = self.sheet_mut() {
            sheet.table_or_default().insert_row(row.clone());
        }
        Ok(())
    }

    fn worksheet_options(
        &mut self,
        _scope: &mut ReadScope,
        options: &WorksheetOptions,
    ) -> ReadResult<()> {
        if let Some(sheet) = self.sheet_mut() {
            sheet.set_options(options.clone());
        }
        Ok(())
    }

    fn auto_filter(&mut self, _scope: &mut ReadScope, range: &str) -> ReadResult<()> {
        if let Some(sheet) = self.sheet_mut() {
            sheet.set_auto_filter(range);
        }
        Ok(())
    }

    fn end_worksheet(&mut self, _scope: &mut ReadScope) -> ReadResult<()> {
        self.current = None;
        Ok(())
    }
}
