//! Reader options

use sheetml_core::{Area, Result};

/// Options for reading SpreadsheetML documents
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Region to reconstruct (default: whole sheet)
    pub area: Option<Area>,
    /// Trim leading and trailing whitespace from text (default: false)
    pub trim_text: bool,
}

impl ReadOptions {
    /// Restrict reading to an area
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Restrict reading to an area given as a label such as `"E11:M16"`
    pub fn with_area_label(self, label: &str) -> Result<Self> {
        Ok(self.with_area(Area::parse(label)?))
    }

    /// Trim whitespace around text content
    pub fn with_trim_text(mut self, trim_text: bool) -> Self {
        self.trim_text = trim_text;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReadOptions::default();
        assert!(options.area.is_none());
        assert!(!options.trim_text);
    }

    #[test]
    fn test_area_label() {
        let options = ReadOptions::default().with_area_label("M16:E11").unwrap();
        assert_eq!(options.area, Some(Area::new(11, 5, 16, 13)));
        assert!(ReadOptions::default().with_area_label("E11").is_err());
    }
}
