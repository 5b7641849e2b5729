//! Workbook-level metadata: `o:DocumentProperties` and `x:ExcelWorkbook`

/// Document summary information (`o:DocumentProperties`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<String>,
    pub description: Option<String>,
    pub last_author: Option<String>,
    pub created: Option<String>,
    pub last_saved: Option<String>,
    pub last_printed: Option<String>,
    pub category: Option<String>,
    pub manager: Option<String>,
    pub company: Option<String>,
    pub hyperlink_base: Option<String>,
    pub app_name: Option<String>,
    pub version: Option<String>,
    /// Revision number
    pub revision: Option<u32>,
    /// Total editing time in minutes
    pub total_time: Option<u32>,
}

/// Workbook window and protection settings (`x:ExcelWorkbook`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExcelWorkbook {
    pub window_height: Option<i32>,
    pub window_width: Option<i32>,
    pub window_top_x: Option<i32>,
    pub window_top_y: Option<i32>,
    /// 0-based index of the active sheet
    pub active_sheet: Option<u32>,
    /// 0-based index of the first visible sheet tab
    pub first_visible_sheet: Option<u32>,
    pub hide_workbook_tabs: bool,
    pub protect_structure: bool,
    pub protect_windows: bool,
    /// Dates count from 1904 instead of 1900
    pub date_1904: bool,
}
