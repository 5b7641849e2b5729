//! Named range definitions
//!
//! A `NamedRange` element lives under `Names`, either at workbook level or
//! inside a worksheet. Its `ss:RefersTo` is an R1C1 formula:
//!
//! ```text
//! <NamedRange ss:Name="Totals" ss:RefersTo="=Sales!R2C3:R5C8"/>
//! ```

use crate::coord::Area;

/// A named range definition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedRange {
    /// The name (e.g., "Totals")
    pub name: String,
    /// What the name refers to, usually `=Sheet!R1C1:R2C2`
    pub refers_to: String,
    /// Whether this name is hidden from the UI
    pub hidden: bool,
}

impl NamedRange {
    /// Create a new named range
    pub fn new(name: impl Into<String>, refers_to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            refers_to: refers_to.into(),
            hidden: false,
        }
    }

    /// Create a named range covering `area` on `sheet`.
    ///
    /// Sheet names that are not plain identifiers are quoted.
    ///
    /// # Example
    /// ```
    /// use sheetml_core::{Area, NamedRange};
    ///
    /// let range = NamedRange::for_area("Totals", "Sales", &Area::new(2, 3, 5, 8));
    /// assert_eq!(range.refers_to, "=Sales!R2C3:R5C8");
    ///
    /// let range = NamedRange::for_area("Cell", "Q1 Sales", &Area::new(1, 1, 1, 1));
    /// assert_eq!(range.refers_to, "='Q1 Sales'!R1C1");
    /// ```
    pub fn for_area(name: impl Into<String>, sheet: &str, area: &Area) -> Self {
        Self::new(
            name,
            format!("={}!{}", quote_sheet_name(sheet), area.absolute_ref()),
        )
    }

    /// Mark this named range as hidden
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Check if the refers_to is a formula (starts with =)
    pub fn is_formula(&self) -> bool {
        self.refers_to.starts_with('=')
    }

    /// Get the refers_to expression without the leading = if it's a formula
    pub fn expression(&self) -> &str {
        self.refers_to.strip_prefix('=').unwrap_or(&self.refers_to)
    }
}

fn quote_sheet_name(sheet: &str) -> String {
    if !sheet.is_empty() && sheet.chars().all(|c| c.is_alphanumeric() || c == '_') {
        sheet.to_string()
    } else {
        format!("'{}'", sheet.replace('\'', "''"))
    }
}
