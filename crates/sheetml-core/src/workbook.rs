//! Workbook type - the main document structure

use crate::error::{Error, Result};
use crate::named_range::NamedRange;
use crate::properties::{DocumentProperties, ExcelWorkbook};
use crate::worksheet::Worksheet;

/// A workbook (spreadsheet document)
///
/// Worksheets keep the order in which they were added. Sheet names are
/// unique, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    /// Display name, usually derived from the source file name
    name: Option<String>,
    /// Full source identifier the workbook was read from
    file_name: Option<String>,
    /// `o:DocumentProperties`
    properties: Option<DocumentProperties>,
    /// `x:ExcelWorkbook`
    excel_workbook: Option<ExcelWorkbook>,
    /// Workbook-scoped names
    named_ranges: Vec<NamedRange>,
    /// Worksheets in the workbook
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create an empty workbook with no worksheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty workbook with a display name
    pub fn with_name<S: Into<String>>(name: S) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Get the display name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the display name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = Some(name.into());
    }

    /// Get the source identifier
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Set the source identifier
    pub fn set_file_name<S: Into<String>>(&mut self, file_name: S) {
        self.file_name = Some(file_name.into());
    }

    /// Get the document properties
    pub fn properties(&self) -> Option<&DocumentProperties> {
        self.properties.as_ref()
    }

    /// Set the document properties
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = Some(properties);
    }

    /// Get the workbook window settings
    pub fn excel_workbook(&self) -> Option<&ExcelWorkbook> {
        self.excel_workbook.as_ref()
    }

    /// Set the workbook window settings
    pub fn set_excel_workbook(&mut self, excel_workbook: ExcelWorkbook) {
        self.excel_workbook = Some(excel_workbook);
    }

    // ==================== Worksheets ====================

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name, ignoring case like the uniqueness check
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| same_name(ws.name(), name))
    }

    /// Get a mutable worksheet by name, ignoring case
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets
            .iter_mut()
            .find(|ws| same_name(ws.name(), name))
    }

    /// Get the index of a worksheet by name, ignoring case
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets
            .iter()
            .position(|ws| same_name(ws.name(), name))
    }

    /// Names of all worksheets, in order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.worksheets.iter().map(Worksheet::name).collect()
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Iterate over all worksheets mutably
    pub fn worksheets_mut(&mut self) -> impl Iterator<Item = &mut Worksheet> {
        self.worksheets.iter_mut()
    }

    /// Append a worksheet, returning its index.
    ///
    /// Fails with [`Error::DuplicateSheetName`] if a sheet with the same name
    /// (ignoring case) already exists.
    pub fn add_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.check_unique_name(worksheet.name())?;
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        Ok(index)
    }

    /// Append a new empty worksheet with the given name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.add_worksheet(Worksheet::new(name))
    }

    /// Remove a worksheet by name
    pub fn remove_worksheet(&mut self, name: &str) -> Result<Worksheet> {
        let index = self
            .sheet_index(name)
            .ok_or_else(|| Error::SheetNotFound(name.into()))?;
        Ok(self.worksheets.remove(index))
    }

    fn check_unique_name(&self, name: &str) -> Result<()> {
        if self.sheet_index(name).is_some() {
            return Err(Error::DuplicateSheetName(name.into()));
        }
        Ok(())
    }

    // ==================== Named Ranges ====================

    /// Workbook-scoped named ranges
    pub fn named_ranges(&self) -> &[NamedRange] {
        &self.named_ranges
    }

    /// Add a workbook-scoped named range
    pub fn add_named_range(&mut self, range: NamedRange) {
        self.named_ranges.push(range);
    }

    /// Look up a named range, preferring the sheet scope of `sheet` if given
    pub fn named_range(&self, name: &str, sheet: Option<&str>) -> Option<&NamedRange> {
        sheet
            .and_then(|s| self.worksheet_by_name(s))
            .and_then(|ws| ws.named_range(name))
            .or_else(|| {
                self.named_ranges
                    .iter()
                    .find(|r| r.name.eq_ignore_ascii_case(name))
            })
    }
}

/// Sheet names compare without regard to case
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
