//! Rectangular areas

use std::fmt;
use std::str::FromStr;

use super::{Address, Location, LocationKind};
use crate::error::{Error, Result};
use crate::{MAX_COLUMNS, MAX_ROWS};

/// A rectangle of cells, always normalized so the first corner is top-left
///
/// Areas are built from two addresses, four numbers or a `"C2:H5"` label; the
/// order in which corners are given never matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Area {
    first_row: u32,
    first_column: u32,
    last_row: u32,
    last_column: u32,
}

impl Area {
    /// Create an area from two corners given as row/column numbers
    pub fn new(row1: u32, column1: u32, row2: u32, column2: u32) -> Self {
        Self {
            first_row: row1.min(row2),
            first_column: column1.min(column2),
            last_row: row1.max(row2),
            last_column: column1.max(column2),
        }
    }

    /// Create an area spanned by two addresses
    pub fn from_addresses(a: Address, b: Address) -> Self {
        Self::new(a.row, a.column, b.row, b.column)
    }

    /// The full bounds of a worksheet, `R1C1:R65536C256`
    pub fn sheet_bounds() -> Self {
        Self::new(1, 1, MAX_ROWS, MAX_COLUMNS)
    }

    /// Parse an area from a `"corner1:corner2"` label.
    ///
    /// Exactly one `:` separating two non-empty corner labels is required.
    /// The corners themselves are read with [`Address::from_label`] and never
    /// fail.
    ///
    /// # Examples
    /// ```
    /// use sheetml_core::Area;
    ///
    /// let area = Area::parse("C2:H5").unwrap();
    /// assert_eq!(area.first_row(), 2);
    /// assert_eq!(area.first_column(), 3);
    /// assert_eq!(area.last_row(), 5);
    /// assert_eq!(area.last_column(), 8);
    /// assert_eq!(area, Area::parse("H5:C2").unwrap());
    ///
    /// assert!(Area::parse("C2").is_err());
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let corners: Vec<&str> = label.split(':').map(str::trim).collect();
        match corners.as_slice() {
            [first, last] if !first.is_empty() && !last.is_empty() => Ok(Self::from_addresses(
                Address::from_label(first),
                Address::from_label(last),
            )),
            _ => Err(Error::InvalidArea(label.to_string())),
        }
    }

    /// First (top) row
    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    /// First (left) column
    pub fn first_column(&self) -> u32 {
        self.first_column
    }

    /// Last (bottom) row
    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    /// Last (right) column
    pub fn last_column(&self) -> u32 {
        self.last_column
    }

    /// Top-left corner
    pub fn top_left(&self) -> Address {
        Address::new(self.first_row, self.first_column)
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Address {
        Address::new(self.last_row, self.last_column)
    }

    /// Number of rows covered
    pub fn row_count(&self) -> u64 {
        u64::from(self.last_row) - u64::from(self.first_row) + 1
    }

    /// Number of columns covered
    pub fn column_count(&self) -> u64 {
        u64::from(self.last_column) - u64::from(self.first_column) + 1
    }

    /// Check whether the area is a single cell
    pub fn is_single_cell(&self) -> bool {
        self.first_row == self.last_row && self.first_column == self.last_column
    }

    /// Check if an address lies within this area
    pub fn contains(&self, addr: &Address) -> bool {
        self.contains_point(addr.row, addr.column)
    }

    /// Check if the cell at (`row`, `column`) lies within this area
    pub fn contains_point(&self, row: u32, column: u32) -> bool {
        self.contains_row(row) && self.contains_column(column)
    }

    /// Check if `row` falls in this area's row band, whatever the column
    pub fn contains_row(&self, row: u32) -> bool {
        (self.first_row..=self.last_row).contains(&row)
    }

    /// Check if `column` falls in this area's column band, whatever the row
    pub fn contains_column(&self, column: u32) -> bool {
        (self.first_column..=self.last_column).contains(&column)
    }

    /// Absolute R1C1 reference (`"R2C3:R5C8"`, or `"R2C3"` for one cell)
    pub fn absolute_ref(&self) -> String {
        if self.is_single_cell() {
            self.top_left().absolute_ref()
        } else {
            format!(
                "{}:{}",
                self.top_left().absolute_ref(),
                self.bottom_right().absolute_ref()
            )
        }
    }

    /// Reference to this area written relative to `origin`
    pub fn relative_ref(&self, origin: &Address) -> String {
        origin.relative_range_to(self)
    }

    /// Comma-joined absolute references of `members`, sorted row-major.
    ///
    /// Every member must be an area.
    pub fn absolute_refs(members: &[Location]) -> Result<String> {
        Location::join_refs(LocationKind::Area, members, Location::absolute_ref)
    }

    /// Comma-joined references of `members` relative to `origin`, sorted
    /// row-major.
    ///
    /// Every member must be an area.
    pub fn relative_refs(origin: &Address, members: &[Location]) -> Result<String> {
        Location::join_refs(LocationKind::Area, members, |member| {
            member.relative_ref(origin)
        })
    }
}

impl Default for Area {
    fn default() -> Self {
        Self::sheet_bounds()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.absolute_ref())
    }
}

impl FromStr for Area {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
