//! Worksheet type

use crate::cell::{Cell, CellValue};
use crate::coord::{Address, Area};
use crate::named_range::NamedRange;
use crate::table::Table;
use crate::worksheet_options::WorksheetOptions;

/// A worksheet (single sheet in a workbook)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worksheet {
    /// Sheet name (`ss:Name`)
    name: String,
    /// Sheet is protected (`ss:Protected`)
    protected: bool,
    /// Columns run right to left (`ss:RightToLeft`)
    right_to_left: bool,
    /// The sheet's grid, set by the first `Table` element
    table: Option<Table>,
    /// View and print settings
    options: Option<WorksheetOptions>,
    /// Sheet-scoped names
    named_ranges: Vec<NamedRange>,
    /// AutoFilter range in R1C1 form
    auto_filter: Option<String>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Check if the sheet is protected
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    /// Set sheet protection
    pub fn set_protected(&mut self, protected: bool) {
        self.protected = protected;
    }

    /// Check if the sheet runs right to left
    pub fn is_right_to_left(&self) -> bool {
        self.right_to_left
    }

    /// Set right-to-left layout
    pub fn set_right_to_left(&mut self, right_to_left: bool) {
        self.right_to_left = right_to_left;
    }

    // === Table ===

    /// Get the table, if one was read
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Get the table mutably, if one was read
    pub fn table_mut(&mut self) -> Option<&mut Table> {
        self.table.as_mut()
    }

    /// Check if the sheet has a table
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Set the table, replacing any existing one
    pub fn set_table(&mut self, table: Table) {
        self.table = Some(table);
    }

    /// Get the table, creating an empty one if there is none
    pub fn table_or_default(&mut self) -> &mut Table {
        self.table.get_or_insert_with(Table::default)
    }

    // === Cell Access ===

    /// Get a cell by label (e.g. `"E11"`)
    pub fn cell(&self, label: &str) -> Option<&Cell> {
        self.cell_at_address(&Address::from_label(label))
    }

    /// Get a cell by address
    pub fn cell_at_address(&self, addr: &Address) -> Option<&Cell> {
        self.table.as_ref().and_then(|t| t.cell(addr))
    }

    /// Get a cell by row and column numbers
    pub fn cell_at(&self, row: u32, column: u32) -> Option<&Cell> {
        self.table.as_ref().and_then(|t| t.cell_at(row, column))
    }

    /// Get a cell value by label, [`CellValue::Empty`] if there is no cell
    pub fn value(&self, label: &str) -> CellValue {
        self.cell(label)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// The smallest area holding every cell of the sheet
    pub fn used_area(&self) -> Option<Area> {
        self.table.as_ref().and_then(Table::used_area)
    }

    // === Options ===

    /// Get the worksheet options
    pub fn options(&self) -> Option<&WorksheetOptions> {
        self.options.as_ref()
    }

    /// Set the worksheet options
    pub fn set_options(&mut self, options: WorksheetOptions) {
        self.options = Some(options);
    }

    // === Names ===

    /// Sheet-scoped named ranges
    pub fn named_ranges(&self) -> &[NamedRange] {
        &self.named_ranges
    }

    /// Add a sheet-scoped named range
    pub fn add_named_range(&mut self, range: NamedRange) {
        self.named_ranges.push(range);
    }

    /// Look up a sheet-scoped named range (case-insensitive)
    pub fn named_range(&self, name: &str) -> Option<&NamedRange> {
        self.named_ranges
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    // === AutoFilter ===

    /// AutoFilter range in R1C1 form
    pub fn auto_filter(&self) -> Option<&str> {
        self.auto_filter.as_deref()
    }

    /// Set the AutoFilter range
    pub fn set_auto_filter<S: Into<String>>(&mut self, range: S) {
        self.auto_filter = Some(range.into());
    }

    /// Set the AutoFilter range from an area
    pub fn set_auto_filter_area(&mut self, area: &Area) {
        self.auto_filter = Some(area.absolute_ref());
    }
}
