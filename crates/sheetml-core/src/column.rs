//! Column types

/// Column metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column number (1-based)
    pub index: u32,
    /// Whether the index came from an `ss:Index` attribute
    pub explicit_index: bool,
    /// Custom width in points (None = default)
    pub width: Option<f64>,
    /// Column is hidden
    pub hidden: bool,
    /// Width adjusts to content (`ss:AutoFitWidth`)
    pub auto_fit_width: Option<bool>,
    /// Style reference (`ss:StyleID`)
    pub style_id: Option<String>,
    /// Number of following columns sharing this description (`ss:Span`)
    pub span: u32,
}

impl Column {
    /// Create a new column with default settings
    pub fn new(index: u32) -> Self {
        Self {
            index,
            explicit_index: false,
            width: None,
            hidden: false,
            auto_fit_width: None,
            style_id: None,
            span: 0,
        }
    }

    /// Check if the index was given explicitly
    pub fn is_index_explicit(&self) -> bool {
        self.explicit_index
    }

    /// Last column this description applies to
    pub fn last_index(&self) -> u32 {
        self.index.saturating_add(self.span)
    }

    /// Check if this description applies to `column`
    pub fn covers(&self, column: u32) -> bool {
        (self.index..=self.last_index()).contains(&column)
    }

    /// Check if this column has any custom settings
    pub fn has_custom_settings(&self) -> bool {
        self.width.is_some()
            || self.hidden
            || self.auto_fit_width.is_some()
            || self.style_id.is_some()
            || self.span > 0
    }
}
