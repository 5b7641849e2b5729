//! Single-cell addresses

use std::fmt;

use super::{column_label, column_number, row_number, Area, Location, LocationKind};
use crate::error::Result;

/// A cell address (row and column, both 1-based)
///
/// Addresses order row-major: every cell of row 3 sorts before any cell of
/// row 4. A coordinate of 0 means the label it was built from had no letters
/// (column) or no digits (row).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A = 1)
    pub column: u32,
}

impl Address {
    /// Create an address from row and column numbers
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Build an address from a label such as `"BQ65"`.
    ///
    /// Letters and digits may interleave and case is ignored, so `"65BQ"` and
    /// `"6Bq5"` name the same cell. Malformed labels never fail; they degrade
    /// to partial or zero coordinates.
    ///
    /// # Examples
    /// ```
    /// use sheetml_core::Address;
    ///
    /// let addr = Address::from_label("BQ65");
    /// assert_eq!(addr, Address::new(65, 69));
    /// assert_eq!(addr, Address::from_label("6Bq5"));
    /// ```
    pub fn from_label(label: &str) -> Self {
        Self {
            row: row_number(label),
            column: column_number(label),
        }
    }

    /// Format as an A1-style label (`"BQ65"`)
    pub fn label(&self) -> String {
        if self.row == 0 {
            column_label(self.column)
        } else {
            format!("{}{}", column_label(self.column), self.row)
        }
    }

    /// Absolute R1C1 reference to this cell (`"R65C69"`)
    pub fn absolute_ref(&self) -> String {
        format!("R{}C{}", self.row, self.column)
    }

    /// Absolute R1C1 reference to the rectangle spanned by this address and
    /// `other`, corners normalized; a single cell gives a single reference.
    pub fn absolute_range(&self, other: &Address) -> String {
        Area::from_addresses(*self, *other).absolute_ref()
    }

    /// Reference to the cell at (`row`, `column`), written relative to this
    /// address.
    ///
    /// An offset is bracketed unless it is exactly zero, in which case the
    /// bare `R` or `C` remains.
    ///
    /// # Examples
    /// ```
    /// use sheetml_core::Address;
    ///
    /// let origin = Address::new(5, 7);
    /// assert_eq!(origin.relative_to(5, 7), "RC");
    /// assert_eq!(origin.relative_to(5, 4), "RC[-3]");
    /// assert_eq!(origin.relative_to(6, 9), "R[1]C[2]");
    /// ```
    pub fn relative_to(&self, row: u32, column: u32) -> String {
        let mut reference = String::from("R");
        push_offset(&mut reference, i64::from(row) - i64::from(self.row));
        reference.push('C');
        push_offset(&mut reference, i64::from(column) - i64::from(self.column));
        reference
    }

    /// Reference to `area`, written relative to this address.
    ///
    /// The two corner references are joined with `:` unless they are
    /// textually identical.
    pub fn relative_range_to(&self, area: &Area) -> String {
        let first = self.relative_to(area.first_row(), area.first_column());
        let last = self.relative_to(area.last_row(), area.last_column());
        if first == last {
            first
        } else {
            format!("{}:{}", first, last)
        }
    }

    /// Comma-joined absolute references of `members`, sorted row-major.
    ///
    /// Every member must be an address.
    pub fn absolute_refs(members: &[Location]) -> Result<String> {
        Location::join_refs(LocationKind::Address, members, Location::absolute_ref)
    }

    /// Comma-joined references of `members` relative to `origin`, sorted
    /// row-major.
    ///
    /// Every member must be an address.
    pub fn relative_refs(origin: &Address, members: &[Location]) -> Result<String> {
        Location::join_refs(LocationKind::Address, members, |member| {
            member.relative_ref(origin)
        })
    }
}

fn push_offset(reference: &mut String, delta: i64) {
    if delta != 0 {
        reference.push_str(&format!("[{}]", delta));
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.absolute_ref())
    }
}

impl From<(u32, u32)> for Address {
    fn from((row, column): (u32, u32)) -> Self {
        Self::new(row, column)
    }
}
