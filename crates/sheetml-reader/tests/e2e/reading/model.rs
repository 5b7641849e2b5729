//! Rebuilding the workbook model.
//!
//! Fixture: `multi_sheet.xml`

use std::fs;

use pretty_assertions::assert_eq;
use sheetml_core::{CellValue, Workbook};
use sheetml_reader::SheetReader;

use crate::{multi_sheet, single_sheet};

fn read_fixture() -> Workbook {
    SheetReader::new()
        .read_workbook_file(multi_sheet())
        .expect("Failed to read fixture")
}

#[test]
fn test_workbook_name_from_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Budget.2003.xml");
    fs::copy(multi_sheet(), &path).unwrap();

    let workbook = SheetReader::new().read_workbook_file(&path).unwrap();
    assert_eq!(workbook.name(), Some("Budget"));
    let source = path.to_string_lossy().into_owned();
    assert_eq!(workbook.file_name(), Some(source.as_str()));
    assert_eq!(workbook.sheet_names(), vec!["Grid", "Notes", "Empty"]);
}

#[test]
fn test_workbook_from_memory_has_no_name() {
    let xml = fs::read_to_string(multi_sheet()).unwrap();
    let workbook = SheetReader::new().read_workbook_str(&xml).unwrap();
    assert_eq!(workbook.name(), None);
    assert_eq!(workbook.sheet_count(), 3);
}

#[test]
fn test_document_level_blocks() {
    let workbook = read_fixture();

    let props = workbook.properties().expect("No document properties");
    assert_eq!(props.title.as_deref(), Some("Quarterly Grid"));
    assert_eq!(props.author.as_deref(), Some("Dana Reyes"));
    assert_eq!(props.last_author.as_deref(), Some("Sam Ortiz"));
    assert_eq!(props.created.as_deref(), Some("2004-03-01T09:15:00Z"));
    assert_eq!(props.company.as_deref(), Some("Northwind"));
    assert_eq!(props.revision, Some(4));
    assert_eq!(props.version.as_deref(), Some("11.6568"));

    let excel = workbook.excel_workbook().expect("No ExcelWorkbook block");
    assert_eq!(excel.window_height, Some(8700));
    assert_eq!(excel.window_width, Some(15180));
    assert_eq!(excel.active_sheet, Some(1));
    assert!(!excel.protect_structure);

    let names: Vec<&str> = workbook
        .named_ranges()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["GridBody", "Hidden_Total"]);
    assert!(workbook.named_ranges()[1].hidden);

    // Sheet scope wins over workbook scope
    let print_area = workbook.named_range("Print_Area", Some("Notes")).unwrap();
    assert_eq!(print_area.refers_to, "=Notes!R1C1:R5C4");
    assert!(workbook.named_range("Print_Area", None).is_none());
}

#[test]
fn test_grid_table() {
    let workbook = read_fixture();
    let grid = workbook.worksheet_by_name("Grid").unwrap();
    let table = grid.table().unwrap();

    assert_eq!(table.expanded_column_count, Some(13));
    assert_eq!(table.expanded_row_count, Some(20));
    assert!(table.full_columns);
    assert_eq!(table.default_row_height, Some(13.2));

    assert_eq!(
        table.columns().map(|c| c.index).collect::<Vec<_>>(),
        vec![1, 3, 5, 12]
    );
    let third = table.column(3).unwrap();
    assert_eq!(third.width, Some(60.0));
    assert_eq!(third.span, 1);
    assert!(table.column_covering(4).is_some());
    assert!(table.column(5).unwrap().hidden);
    assert!(table.column(12).unwrap().explicit_index);

    assert_eq!(table.row_count(), 19);
    assert!(table.row(15).is_none());
    assert!(table.row(16).unwrap().explicit_index);
    assert_eq!(table.row(4).unwrap().height, Some(24.0));
    assert_eq!(table.row(4).unwrap().auto_fit_height, Some(false));

    assert_eq!(grid.value("A1").as_str(), Some("A1"));
    assert_eq!(grid.value("B7").as_number(), Some(70.0));
    assert_eq!(grid.value("M20").as_str(), Some("M20"));
    assert!(grid.cell("F11").is_none());
    assert!(grid.cell("G11").unwrap().explicit_index);
    assert_eq!(grid.used_area().unwrap().absolute_ref(), "R1C1:R20C13");
}

#[test]
fn test_grid_options() {
    let workbook = read_fixture();
    let grid = workbook.worksheet_by_name("Grid").unwrap();
    let options = grid.options().expect("No worksheet options");

    assert_eq!(options.page_setup.layout.orientation.as_deref(), Some("Landscape"));
    assert!(options.page_setup.layout.center_horizontal);
    assert_eq!(options.page_setup.header.data.as_deref(), Some("&CGrid"));
    assert_eq!(options.page_setup.header.margin, Some(0.3));
    assert_eq!(options.page_setup.margins.left, Some(0.75));

    assert!(options.print.valid_printer_info);
    assert_eq!(options.print.paper_size_index, Some(9));
    assert_eq!(options.print.horizontal_resolution, Some(600));

    assert!(options.freeze_panes);
    assert!(options.frozen_no_split);
    assert_eq!(options.split_horizontal, Some(1));
    assert_eq!(options.active_pane, Some(2));
    assert_eq!(options.panes.len(), 2);
    let pane = options.pane(2).unwrap();
    assert_eq!(pane.active_row, Some(10));
    assert_eq!(pane.active_col, Some(4));

    assert!(options.display_gridlines);
    assert_eq!(grid.auto_filter(), Some("R1C1:R20C13"));
}

#[test]
fn test_notes_cells() {
    let workbook = read_fixture();
    let notes = workbook.worksheet_by_name("Notes").unwrap();
    assert!(notes.is_protected());

    let heading = notes.cell("A1").unwrap();
    assert_eq!(heading.value, CellValue::string("Merged heading"));
    assert_eq!(heading.merge_across, 1);
    assert_eq!(notes.value("C1"), CellValue::Boolean(true));

    let date = notes.cell("D1").unwrap();
    assert_eq!(
        date.value.as_datetime().map(|d| d.to_string()).as_deref(),
        Some("2004-03-01 00:00:00")
    );
    assert_eq!(date.style_id.as_deref(), Some("s21"));

    let formula = notes.cell("A2").unwrap();
    assert_eq!(formula.formula.as_deref(), Some("=R[-1]C[1]*2"));
    assert_eq!(formula.value.as_number(), Some(2.0));
    assert_eq!(notes.value("B2"), CellValue::Error("#DIV/0!".into()));

    // Unparseable numbers keep their text
    assert_eq!(notes.value("C2"), CellValue::string("n/a"));

    let link = notes.cell("D2").unwrap();
    assert_eq!(link.href.as_deref(), Some("http://example.com/"));
    assert_eq!(link.href_screen_tip.as_deref(), Some("Example"));

    assert_eq!(notes.value("A4"), CellValue::string("Bold and italic"));

    let noted = notes.cell("C4").unwrap();
    assert_eq!(noted.value.as_str(), Some("noted"));
    let comment = noted.comment.as_ref().expect("No comment");
    assert_eq!(comment.author, "Dana Reyes");
    assert_eq!(comment.text, "Dana Reyes: check this");
    assert_eq!(noted.named_cells, vec!["Print_Area".to_string()]);
}

#[test]
fn test_notes_options_and_names() {
    let workbook = read_fixture();
    let notes = workbook.worksheet_by_name("Notes").unwrap();

    let options = notes.options().unwrap();
    assert!(options.selected);
    assert!(!options.display_gridlines);
    assert_eq!(options.zoom, Some(85));
    assert!(options.panes.is_empty());

    assert_eq!(notes.named_ranges().len(), 1);
    assert!(notes.named_range("print_area").is_some());
    assert_eq!(notes.auto_filter(), None);
}

#[test]
fn test_sheet_without_table() {
    let workbook = read_fixture();
    let empty = workbook.worksheet_by_name("Empty").unwrap();
    assert!(!empty.has_table());
    assert!(empty.options().is_none());
    assert_eq!(empty.value("A1"), CellValue::Empty);
}

#[test]
fn test_declared_namespaces() {
    let mut reader = SheetReader::new();
    reader.read_file(multi_sheet()).unwrap();

    let namespaces = reader.namespaces();
    assert_eq!(
        namespaces.get(""),
        Some("urn:schemas-microsoft-com:office:spreadsheet")
    );
    assert_eq!(namespaces.get("o"), Some("urn:schemas-microsoft-com:office:office"));
    assert_eq!(namespaces.get("html"), Some("http://www.w3.org/TR/REC-html40"));
    assert_eq!(
        namespaces.prefix_of("urn:schemas-microsoft-com:office:excel"),
        Some("x")
    );
}

#[test]
fn test_blank_typed_data_is_empty() {
    let xml = single_sheet(
        r#"   <Row>
    <Cell><Data ss:Type="Number"/></Cell>
    <Cell><Data ss:Type="DateTime">  </Data></Cell>
    <Cell><Data ss:Type="String"></Data></Cell>
    <Cell><Data ss:Type="String"> </Data></Cell>
    <Cell><Data ss:Type="Number">7</Data></Cell>
   </Row>"#,
    );
    let workbook = SheetReader::new().read_workbook_str(&xml).unwrap();
    let sheet = workbook.worksheet(0).unwrap();

    assert_eq!(sheet.value("A1"), CellValue::Empty);
    assert_eq!(sheet.value("B1"), CellValue::Empty);
    assert_eq!(sheet.value("C1"), CellValue::Empty);
    assert_eq!(sheet.value("D1"), CellValue::string(" "));
    assert_eq!(sheet.value("E1").as_number(), Some(7.0));

    // The cells themselves are still there
    assert!(sheet.cell("A1").is_some());
}

#[test]
fn test_sheet_lookup_ignores_case() {
    let workbook = read_fixture();
    assert_eq!(workbook.worksheet_by_name("grid").unwrap().name(), "Grid");
    assert_eq!(workbook.sheet_index("NOTES"), Some(1));
}
