//! End-to-end tests for sheetml-reader.
//!
//! Most tests read `tests/fixtures/multi_sheet.xml`, a three-sheet workbook:
//!
//! - `Grid`: rows 1-20 (row 15 missing) by columns A-M, every cell holding
//!   its own A1 label except column B, which holds `row * 10`. Cell F11 is
//!   missing. Also carries column descriptions, worksheet options and an
//!   AutoFilter.
//! - `Notes`: typed values, a merged cell, a formula, a hyperlink, rich text,
//!   a comment and a sheet-scoped name.
//! - `Empty`: no table at all.
//!
//! Smaller documents are written inline where a test needs exact control.

mod common;
mod reading;

pub use common::*;
