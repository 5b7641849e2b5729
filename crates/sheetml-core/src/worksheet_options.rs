//! Per-sheet view and print settings (`x:WorksheetOptions`)

/// View, pane and print settings of a worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetOptions {
    /// Sheet tab is selected
    pub selected: bool,
    /// `SheetHidden` / `SheetVeryHidden` / `SheetVisible`
    pub visible: Option<String>,
    pub freeze_panes: bool,
    pub frozen_no_split: bool,
    pub split_horizontal: Option<u32>,
    pub top_row_bottom_pane: Option<u32>,
    pub split_vertical: Option<u32>,
    pub left_column_right_pane: Option<u32>,
    pub active_pane: Option<u32>,
    pub top_row_visible: Option<u32>,
    pub left_column_visible: Option<u32>,
    /// Zoom percentage
    pub zoom: Option<u32>,
    pub display_gridlines: bool,
    pub display_right_to_left: bool,
    pub tab_color_index: Option<u32>,
    pub protect_objects: bool,
    pub protect_scenarios: bool,
    pub panes: Vec<Pane>,
    pub page_setup: PageSetup,
    pub print: Print,
}

impl Default for WorksheetOptions {
    fn default() -> Self {
        Self {
            selected: false,
            visible: None,
            freeze_panes: false,
            frozen_no_split: false,
            split_horizontal: None,
            top_row_bottom_pane: None,
            split_vertical: None,
            left_column_right_pane: None,
            active_pane: None,
            top_row_visible: None,
            left_column_visible: None,
            zoom: None,
            display_gridlines: true,
            display_right_to_left: false,
            tab_color_index: None,
            protect_objects: false,
            protect_scenarios: false,
            panes: Vec::new(),
            page_setup: PageSetup::default(),
            print: Print::default(),
        }
    }
}

impl WorksheetOptions {
    /// The pane with a given number, if present
    pub fn pane(&self, number: u32) -> Option<&Pane> {
        self.panes.iter().find(|p| p.number == Some(number))
    }
}

/// One window pane of a (possibly split) sheet view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pane {
    pub number: Option<u32>,
    /// 0-based active row
    pub active_row: Option<u32>,
    /// 0-based active column
    pub active_col: Option<u32>,
    /// Selected range in R1C1 form
    pub range_selection: Option<String>,
}

/// `x:PageSetup`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSetup {
    pub layout: Layout,
    pub header: HeaderFooter,
    pub footer: HeaderFooter,
    pub margins: PageMargins,
}

/// `x:Layout`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    /// `Portrait` or `Landscape`
    pub orientation: Option<String>,
    pub center_horizontal: bool,
    pub center_vertical: bool,
    pub start_page_number: Option<u32>,
}

/// `x:Header` / `x:Footer`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderFooter {
    /// Margin in inches
    pub margin: Option<f64>,
    pub data: Option<String>,
}

/// `x:PageMargins`, in inches
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMargins {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

/// `x:Print`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Print {
    pub valid_printer_info: bool,
    pub paper_size_index: Option<u32>,
    /// Scale percentage
    pub scale: Option<u32>,
    pub fit_width: Option<u32>,
    pub fit_height: Option<u32>,
    pub horizontal_resolution: Option<u32>,
    pub vertical_resolution: Option<u32>,
    pub gridlines: bool,
    pub black_and_white: bool,
    pub draft_quality: bool,
    pub left_to_right: bool,
    pub row_col_headings: bool,
    pub comments_layout: Option<String>,
}
