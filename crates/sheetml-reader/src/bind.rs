//! Name-driven binding of attributes and leaf elements onto model structs
//!
//! Each bindable type owns a [`Bindings`] table built once on first use. The
//! table maps a markup name (attribute or child element, local part only) to
//! a setter, and a compound child name to a factory plus an attach function.
//! Names missing from a table are reported back as misses so the caller can
//! ignore them.

use std::any::Any;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use sheetml_core::{
    Comment, DocumentProperties, ExcelWorkbook, HeaderFooter, Layout, NamedRange, PageMargins,
    PageSetup, Pane, Print, WorksheetOptions,
};

use crate::xml::parse_flag;

/// A value object the generic builder can fill in by name
pub(crate) trait Bindable: Any {
    /// Assign a scalar; `false` if the name is unknown
    fn bind_value(&mut self, name: &str, value: &str) -> bool;

    /// Create an empty child object for a compound element
    fn open_compound(&self, name: &str) -> Option<Box<dyn Bindable>>;

    /// Attach a finished child object; `false` if the name is unknown
    fn bind_compound(&mut self, name: &str, child: Box<dyn Bindable>) -> bool;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Take a finished object back out of its binding box
pub(crate) fn downcast<T: 'static>(target: Box<dyn Bindable>) -> Option<T> {
    target.into_any().downcast::<T>().ok().map(|b| *b)
}

type Setter<T> = fn(&mut T, &str);
type Attach<T> = fn(&mut T, Box<dyn Any>) -> bool;

struct Compound<T> {
    open: fn() -> Box<dyn Bindable>,
    attach: Attach<T>,
}

/// Setter table for one bindable type
pub(crate) struct Bindings<T> {
    values: HashMap<&'static str, Setter<T>>,
    compounds: HashMap<&'static str, Compound<T>>,
}

impl<T> Bindings<T> {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            compounds: HashMap::new(),
        }
    }

    fn value(mut self, name: &'static str, setter: Setter<T>) -> Self {
        self.values.insert(name, setter);
        self
    }

    fn compound(
        mut self,
        name: &'static str,
        open: fn() -> Box<dyn Bindable>,
        attach: Attach<T>,
    ) -> Self {
        self.compounds.insert(name, Compound { open, attach });
        self
    }

    pub(crate) fn bind_value(&self, target: &mut T, name: &str, value: &str) -> bool {
        match self.values.get(name) {
            Some(set) => {
                set(target, value);
                true
            }
            None => false,
        }
    }

    pub(crate) fn open(&self, name: &str) -> Option<Box<dyn Bindable>> {
        self.compounds.get(name).map(|c| (c.open)())
    }

    pub(crate) fn attach(&self, target: &mut T, name: &str, child: Box<dyn Bindable>) -> bool {
        match self.compounds.get(name) {
            Some(c) => (c.attach)(target, child.into_any()),
            None => false,
        }
    }
}

macro_rules! bindable {
    ($ty:ty, $table:ident) => {
        impl Bindable for $ty {
            fn bind_value(&mut self, name: &str, value: &str) -> bool {
                $table.bind_value(self, name, value)
            }

            fn open_compound(&self, name: &str) -> Option<Box<dyn Bindable>> {
                $table.open(name)
            }

            fn bind_compound(&mut self, name: &str, child: Box<dyn Bindable>) -> bool {
                $table.attach(self, name, child)
            }

            fn into_any(self: Box<Self>) -> Box<dyn Any> {
                self
            }
        }
    };
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn number<N: std::str::FromStr>(value: &str) -> Option<N> {
    value.trim().parse().ok()
}

/// Attribute flag: `1`/`0`
fn flag(value: &str) -> bool {
    parse_flag(value).unwrap_or(false)
}

/// Element flag: present and empty means set, otherwise `True`/`False`
fn element_flag(value: &str) -> bool {
    value.trim().is_empty() || flag(value)
}

fn attach<T: 'static>(child: Box<dyn Any>, assign: impl FnOnce(T)) -> bool {
    match child.downcast::<T>() {
        Ok(child) => {
            assign(*child);
            true
        }
        Err(_) => false,
    }
}

// === Workbook level ===

static DOCUMENT_PROPERTIES: Lazy<Bindings<DocumentProperties>> = Lazy::new(|| {
    Bindings::<DocumentProperties>::new()
        .value("Title", |p, v| p.title = text(v))
        .value("Subject", |p, v| p.subject = text(v))
        .value("Author", |p, v| p.author = text(v))
        .value("Keywords", |p, v| p.keywords = text(v))
        .value("Description", |p, v| p.description = text(v))
        .value("LastAuthor", |p, v| p.last_author = text(v))
        .value("Created", |p, v| p.created = text(v))
        .value("LastSaved", |p, v| p.last_saved = text(v))
        .value("LastPrinted", |p, v| p.last_printed = text(v))
        .value("Category", |p, v| p.category = text(v))
        .value("Manager", |p, v| p.manager = text(v))
        .value("Company", |p, v| p.company = text(v))
        .value("HyperlinkBase", |p, v| p.hyperlink_base = text(v))
        .value("AppName", |p, v| p.app_name = text(v))
        .value("Version", |p, v| p.version = text(v))
        .value("Revision", |p, v| p.revision = number(v))
        .value("TotalTime", |p, v| p.total_time = number(v))
});
bindable!(DocumentProperties, DOCUMENT_PROPERTIES);

static EXCEL_WORKBOOK: Lazy<Bindings<ExcelWorkbook>> = Lazy::new(|| {
    Bindings::<ExcelWorkbook>::new()
        .value("WindowHeight", |w, v| w.window_height = number(v))
        .value("WindowWidth", |w, v| w.window_width = number(v))
        .value("WindowTopX", |w, v| w.window_top_x = number(v))
        .value("WindowTopY", |w, v| w.window_top_y = number(v))
        .value("ActiveSheet", |w, v| w.active_sheet = number(v))
        .value("FirstVisibleSheet", |w, v| w.first_visible_sheet = number(v))
        .value("HideWorkbookTabs", |w, v| w.hide_workbook_tabs = element_flag(v))
        .value("ProtectStructure", |w, v| w.protect_structure = element_flag(v))
        .value("ProtectWindows", |w, v| w.protect_windows = element_flag(v))
        .value("Date1904", |w, v| w.date_1904 = element_flag(v))
});
bindable!(ExcelWorkbook, EXCEL_WORKBOOK);

static NAMED_RANGE: Lazy<Bindings<NamedRange>> = Lazy::new(|| {
    Bindings::<NamedRange>::new()
        .value("Name", |r, v| r.name = v.to_string())
        .value("RefersTo", |r, v| r.refers_to = v.to_string())
        .value("Hidden", |r, v| r.hidden = flag(v))
});
bindable!(NamedRange, NAMED_RANGE);

// === Cell level ===

static COMMENT: Lazy<Bindings<Comment>> = Lazy::new(|| {
    Bindings::<Comment>::new()
        .value("Author", |c, v| c.author = v.to_string())
        .value("ShowAlways", |c, v| c.show_always = flag(v))
        .value("Data", |c, v| c.text = v.to_string())
});
bindable!(Comment, COMMENT);

// === Worksheet options ===

/// Collects `x:Pane` children of `x:Panes`
#[derive(Debug, Default)]
struct PaneList(Vec<Pane>);

static WORKSHEET_OPTIONS: Lazy<Bindings<WorksheetOptions>> = Lazy::new(|| {
    Bindings::<WorksheetOptions>::new()
        .value("Selected", |o, v| o.selected = element_flag(v))
        .value("Visible", |o, v| o.visible = text(v.trim()))
        .value("FreezePanes", |o, v| o.freeze_panes = element_flag(v))
        .value("FrozenNoSplit", |o, v| o.frozen_no_split = element_flag(v))
        .value("SplitHorizontal", |o, v| o.split_horizontal = number(v))
        .value("TopRowBottomPane", |o, v| o.top_row_bottom_pane = number(v))
        .value("SplitVertical", |o, v| o.split_vertical = number(v))
        .value("LeftColumnRightPane", |o, v| o.left_column_right_pane = number(v))
        .value("ActivePane", |o, v| o.active_pane = number(v))
        .value("TopRowVisible", |o, v| o.top_row_visible = number(v))
        .value("LeftColumnVisible", |o, v| o.left_column_visible = number(v))
        .value("Zoom", |o, v| o.zoom = number(v))
        .value("DoNotDisplayGridlines", |o, v| o.display_gridlines = !element_flag(v))
        .value("DisplayRightToLeft", |o, v| o.display_right_to_left = element_flag(v))
        .value("TabColorIndex", |o, v| o.tab_color_index = number(v))
        .value("ProtectObjects", |o, v| o.protect_objects = element_flag(v))
        .value("ProtectScenarios", |o, v| o.protect_scenarios = element_flag(v))
        .compound(
            "PageSetup",
            || Box::new(PageSetup::default()),
            |o, child| attach(child, |p: PageSetup| o.page_setup = p),
        )
        .compound(
            "Print",
            || Box::new(Print::default()),
            |o, child| attach(child, |p: Print| o.print = p),
        )
        .compound(
            "Panes",
            || Box::new(PaneList::default()),
            |o, child| attach(child, |l: PaneList| o.panes = l.0),
        )
});
bindable!(WorksheetOptions, WORKSHEET_OPTIONS);

static PANE_LIST: Lazy<Bindings<PaneList>> = Lazy::new(|| {
    Bindings::<PaneList>::new().compound(
        "Pane",
        || Box::new(Pane::default()),
        |l, child| attach(child, |p: Pane| l.0.push(p)),
    )
});
bindable!(PaneList, PANE_LIST);

static PANE: Lazy<Bindings<Pane>> = Lazy::new(|| {
    Bindings::<Pane>::new()
        .value("Number", |p, v| p.number = number(v))
        .value("ActiveRow", |p, v| p.active_row = number(v))
        .value("ActiveCol", |p, v| p.active_col = number(v))
        .value("RangeSelection", |p, v| p.range_selection = text(v.trim()))
});
bindable!(Pane, PANE);

static PAGE_SETUP: Lazy<Bindings<PageSetup>> = Lazy::new(|| {
    Bindings::<PageSetup>::new()
        .compound(
            "Layout",
            || Box::new(Layout::default()),
            |s, child| attach(child, |l: Layout| s.layout = l),
        )
        .compound(
            "Header",
            || Box::new(HeaderFooter::default()),
            |s, child| attach(child, |h: HeaderFooter| s.header = h),
        )
        .compound(
            "Footer",
            || Box::new(HeaderFooter::default()),
            |s, child| attach(child, |f: HeaderFooter| s.footer = f),
        )
        .compound(
            "PageMargins",
            || Box::new(PageMargins::default()),
            |s, child| attach(child, |m: PageMargins| s.margins = m),
        )
});
bindable!(PageSetup, PAGE_SETUP);

static LAYOUT: Lazy<Bindings<Layout>> = Lazy::new(|| {
    Bindings::<Layout>::new()
        .value("Orientation", |l, v| l.orientation = text(v))
        .value("CenterHorizontal", |l, v| l.center_horizontal = flag(v))
        .value("CenterVertical", |l, v| l.center_vertical = flag(v))
        .value("StartPageNumber", |l, v| l.start_page_number = number(v))
});
bindable!(Layout, LAYOUT);

static HEADER_FOOTER: Lazy<Bindings<HeaderFooter>> = Lazy::new(|| {
    Bindings::<HeaderFooter>::new()
        .value("Margin", |h, v| h.margin = number(v))
        .value("Data", |h, v| h.data = text(v))
});
bindable!(HeaderFooter, HEADER_FOOTER);

static PAGE_MARGINS: Lazy<Bindings<PageMargins>> = Lazy::new(|| {
    Bindings::<PageMargins>::new()
        .value("Top", |m, v| m.top = number(v))
        .value("Bottom", |m, v| m.bottom = number(v))
        .value("Left", |m, v| m.left = number(v))
        .value("Right", |m, v| m.right = number(v))
});
bindable!(PageMargins, PAGE_MARGINS);

static PRINT: Lazy<Bindings<Print>> = Lazy::new(|| {
    Bindings::<Print>::new()
        .value("ValidPrinterInfo", |p, v| p.valid_printer_info = element_flag(v))
        .value("PaperSizeIndex", |p, v| p.paper_size_index = number(v))
        .value("Scale", |p, v| p.scale = number(v))
        .value("FitWidth", |p, v| p.fit_width = number(v))
        .value("FitHeight", |p, v| p.fit_height = number(v))
        .value("HorizontalResolution", |p, v| p.horizontal_resolution = number(v))
        .value("VerticalResolution", |p, v| p.vertical_resolution = number(v))
        .value("Gridlines", |p, v| p.gridlines = element_flag(v))
        .value("BlackAndWhite", |p, v| p.black_and_white = element_flag(v))
        .value("DraftQuality", |p, v| p.draft_quality = element_flag(v))
        .value("LeftToRight", |p, v| p.left_to_right = element_flag(v))
        .value("RowColHeadings", |p, v| p.row_col_headings = element_flag(v))
        .value("CommentsLayout", |p, v| p.comments_layout = text(v.trim()))
});
bindable!(Print, PRINT);
