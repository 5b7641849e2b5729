//! Cell value types

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// The `ss:Type` of a `Data` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Number,
    String,
    Boolean,
    DateTime,
    Error,
}

impl DataType {
    /// Look up a type by its SpreadsheetML name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        const NAMES: [(&str, DataType); 5] = [
            ("Number", DataType::Number),
            ("String", DataType::String),
            ("Boolean", DataType::Boolean),
            ("DateTime", DataType::DateTime),
            ("Error", DataType::Error),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|(_, t)| *t)
    }

    /// SpreadsheetML name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Number => "Number",
            DataType::String => "String",
            DataType::Boolean => "Boolean",
            DataType::DateTime => "DateTime",
            DataType::Error => "Error",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (no `Data` element)
    Empty,

    /// Numeric value
    Number(f64),

    /// String value (rich text is flattened to its characters)
    String(String),

    /// Boolean value (`1`/`0`)
    Boolean(bool),

    /// Date and time (`1999-12-31T23:59:00.000`)
    DateTime(NaiveDateTime),

    /// Error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Interpret `text` as a value of type `data_type`.
    ///
    /// Returns `None` when the text does not parse as that type.
    pub fn parse(data_type: DataType, text: &str) -> Option<Self> {
        match data_type {
            DataType::Number => text.trim().parse().ok().map(CellValue::Number),
            DataType::String => Some(CellValue::String(text.to_string())),
            DataType::Boolean => match text.trim() {
                "1" => Some(CellValue::Boolean(true)),
                "0" => Some(CellValue::Boolean(false)),
                other if other.eq_ignore_ascii_case("true") => Some(CellValue::Boolean(true)),
                other if other.eq_ignore_ascii_case("false") => Some(CellValue::Boolean(false)),
                _ => None,
            },
            DataType::DateTime => parse_datetime(text.trim()).map(CellValue::DateTime),
            DataType::Error => Some(CellValue::Error(text.trim().to_string())),
        }
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The SpreadsheetML type of this value, if it has one
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(_) => Some(DataType::Number),
            CellValue::String(_) => Some(DataType::String),
            CellValue::Boolean(_) => Some(DataType::Boolean),
            CellValue::DateTime(_) => Some(DataType::DateTime),
            CellValue::Error(_) => Some(DataType::Error),
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Boolean(true) => Some(1.0),
            CellValue::Boolean(false) => Some(0.0),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a date-time
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Boolean(true) => write!(f, "1"),
            CellValue::Boolean(false) => write!(f, "0"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3f")),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}
