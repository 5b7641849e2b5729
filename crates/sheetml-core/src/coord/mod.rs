//! Coordinate algebra
//!
//! SpreadsheetML addresses cells in R1C1 notation, but labels such as `"E11"`
//! are still accepted wherever a corner is given. This module contains:
//! - [`column_number`] / [`row_number`] / [`column_label`] - label arithmetic
//! - [`Address`] - a single (row, column) coordinate
//! - [`Area`] - a normalized rectangle
//! - [`Location`] - either of the two, for collection references

mod address;
mod area;
mod location;

pub use address::Address;
pub use area::Area;
pub use location::{Location, LocationKind};

/// Column number of the letters in `label` (A = 1, Z = 26, AA = 27, ...).
///
/// Letters are read right to left in bijective base 26; digits and any other
/// characters are skipped, so `"b5q"` and `"BQ"` give the same number. A label
/// without letters yields 0. Very long labels saturate at `u32::MAX`.
pub fn column_number(label: &str) -> u32 {
    let mut number: u64 = 0;
    let mut weight: u64 = 1;
    for c in label.chars().rev().filter(char::is_ascii_alphabetic) {
        let digit = u64::from(c.to_ascii_uppercase() as u8 - b'A' + 1);
        number = number.saturating_add(digit.saturating_mul(weight));
        weight = weight.saturating_mul(26);
    }
    u32::try_from(number).unwrap_or(u32::MAX)
}

/// Row number of the digits in `label`, read positionally in base 10.
///
/// Letters are skipped; a label without digits yields 0.
pub fn row_number(label: &str) -> u32 {
    let mut number: u64 = 0;
    let mut weight: u64 = 1;
    for c in label.chars().rev().filter(char::is_ascii_digit) {
        let digit = u64::from(c as u8 - b'0');
        number = number.saturating_add(digit.saturating_mul(weight));
        weight = weight.saturating_mul(10);
    }
    u32::try_from(number).unwrap_or(u32::MAX)
}

/// Column letters for a column number (1 = A, 26 = Z, 27 = AA).
///
/// Bijective base 26: a zero remainder becomes `Z` and borrows from the next
/// place. Column 0 has no label and yields an empty string.
pub fn column_label(column: u32) -> String {
    let mut n = column;
    let mut letters = Vec::new();
    while n > 0 {
        let mut rem = n % 26;
        n /= 26;
        if rem == 0 {
            rem = 26;
            n -= 1;
        }
        letters.push(char::from(b'A' + rem as u8 - 1));
    }
    letters.iter().rev().collect()
}
