//! Region filtering.
//!
//! Fixture: `multi_sheet.xml`

use pretty_assertions::assert_eq;
use sheetml_core::{Area, Row};
use sheetml_reader::{ReadResult, ReadScope, ReaderListener, SheetAreas, SheetReader};

use crate::{event_log, events_of, multi_sheet, single_sheet, Recorder};

#[test]
fn test_region_keeps_only_its_bands() {
    let mut reader = SheetReader::new();
    reader.set_read_area_label("E11:M16").unwrap();
    let workbook = reader
        .read_workbook_file(multi_sheet())
        .expect("Failed to read workbook");

    let grid = workbook.worksheet_by_name("Grid").expect("No Grid sheet");
    let table = grid.table().expect("Grid has no table");

    assert_eq!(
        table.row_indices().collect::<Vec<_>>(),
        vec![11, 12, 13, 14, 16]
    );
    assert!(table.row(10).is_none());
    assert!(table.row(20).is_none());

    // Column G is inside the band, column A is not
    assert_eq!(grid.value("G11").as_str(), Some("G11"));
    assert!(grid.cell("A11").is_none());
    assert!(grid.cell("D12").is_none());
    assert_eq!(grid.value("M16").as_str(), Some("M16"));

    // The authored value survives filtering
    assert_eq!(grid.value("E11").as_str(), Some("E11"));

    // Only column descriptions inside the band are kept
    assert_eq!(
        table.columns().map(|c| c.index).collect::<Vec<_>>(),
        vec![5, 12]
    );

    // Every sheet is filtered the same way
    let notes = workbook.worksheet_by_name("Notes").unwrap();
    assert_eq!(notes.table().unwrap().row_count(), 0);
    assert_eq!(workbook.sheet_count(), 3);
}

#[test]
fn test_full_bounds_match_unfiltered_read() {
    let mut reader = SheetReader::new();
    let unfiltered = reader.read_workbook_file(multi_sheet()).unwrap();

    reader.set_read_area(Area::sheet_bounds());
    let bounded = reader.read_workbook_file(multi_sheet()).unwrap();

    assert_eq!(bounded, unfiltered);
}

#[test]
fn test_excluded_rows_produce_no_callbacks() {
    let xml = single_sheet(
        r#"   <Row><Cell><Data ss:Type="Number">1</Data></Cell></Row>
   <Row><Cell><Data ss:Type="Number">2</Data></Cell><Cell><Data ss:Type="Number">3</Data></Cell></Row>"#,
    );
    let log = event_log();
    let mut reader = SheetReader::new();
    reader.set_read_area_label("B2:B2").unwrap();
    reader
        .read_with(xml.as_bytes(), None, &mut Recorder::new("r", &log))
        .unwrap();

    assert_eq!(
        events_of(&log, "r"),
        vec![
            "start",
            "sheet Sheet1 #0",
            "cell 2:2",
            "row 2",
            "end sheet",
            "end"
        ]
    );
}

#[test]
fn test_implicit_indices_follow_explicit_ones() {
    let xml = single_sheet(
        r#"   <Row/>
   <Row/>
   <Row ss:Index="5"/>
   <Row/>"#,
    );
    let log = event_log();
    SheetReader::new()
        .read_with(xml.as_bytes(), None, &mut Recorder::new("r", &log))
        .unwrap();

    let rows: Vec<String> = events_of(&log, "r")
        .into_iter()
        .filter(|e| e.starts_with("row"))
        .collect();
    assert_eq!(rows, vec!["row 1", "row 2", "row 5", "row 6"]);
}

#[test]
fn test_merge_and_span_advance_indices() {
    let xml = single_sheet(
        r#"   <Row ss:Span="2"><Cell ss:MergeAcross="2"/><Cell/></Row>
   <Row><Cell ss:Index="3"/><Cell/></Row>"#,
    );
    let workbook = SheetReader::new().read_workbook_str(&xml).unwrap();
    let table = workbook.worksheet(0).unwrap().table().unwrap();

    assert_eq!(table.row_indices().collect::<Vec<_>>(), vec![1, 4]);
    let first: Vec<u32> = table.row(1).unwrap().cells().map(|c| c.index).collect();
    assert_eq!(first, vec![1, 4]);
    let second: Vec<u32> = table.row(4).unwrap().cells().map(|c| c.index).collect();
    assert_eq!(second, vec![3, 4]);
}

/// Stops reading rows after the second one by narrowing the area.
struct StopAfterSecondRow;

impl ReaderListener for StopAfterSecondRow {
    fn row(&mut self, scope: &mut ReadScope, row: &Row) -> ReadResult<()> {
        if row.index == 2 {
            scope.set_area(Area::new(1, 1, 2, 256));
        }
        Ok(())
    }
}

#[test]
fn test_listener_narrows_area_mid_read() {
    let xml = single_sheet(
        r#"   <Row><Cell/></Row>
   <Row><Cell/></Row>
   <Row><Cell/></Row>
   <Row><Cell/></Row>"#,
    );
    let mut reader = SheetReader::new();
    reader.add_listener(Box::new(StopAfterSecondRow));
    let workbook = reader.read_workbook_str(&xml).unwrap();

    let table = workbook.worksheet(0).unwrap().table().unwrap();
    assert_eq!(table.row_indices().collect::<Vec<_>>(), vec![1, 2]);

    // The reader's own configuration is untouched
    assert!(reader.read_area().is_none());
}

#[test]
fn test_sheet_areas_per_sheet() {
    let mut reader = SheetReader::new();
    reader.add_listener(Box::new(
        SheetAreas::new()
            .area("Grid", Area::parse("B2:C3").unwrap())
            .area("Notes", Area::parse("A1:A1").unwrap()),
    ));
    let workbook = reader.read_workbook_file(multi_sheet()).unwrap();

    let grid = workbook.worksheet_by_name("Grid").unwrap();
    let labels: Vec<String> = grid
        .table()
        .unwrap()
        .cells()
        .map(|(addr, _)| addr.label())
        .collect();
    assert_eq!(labels, vec!["B2", "C2", "B3", "C3"]);
    assert_eq!(grid.value("B3").as_number(), Some(30.0));

    let notes = workbook.worksheet_by_name("Notes").unwrap();
    let labels: Vec<String> = notes
        .table()
        .unwrap()
        .cells()
        .map(|(addr, _)| addr.label())
        .collect();
    assert_eq!(labels, vec!["A1"]);
}

#[test]
fn test_sheet_areas_keep_configured_area_for_other_sheets() {
    let xml = r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <Worksheet ss:Name="Data">
  <Table><Row><Cell/><Cell/><Cell/></Row></Table>
 </Worksheet>
 <Worksheet ss:Name="Other">
  <Table><Row><Cell/><Cell/><Cell/></Row></Table>
 </Worksheet>
</Workbook>"#;
    let mut reader = SheetReader::new();
    reader.set_read_area_label("B1:B1").unwrap();
    reader.add_listener(Box::new(
        SheetAreas::new().area("Other", Area::parse("A1:A1").unwrap()),
    ));
    let workbook = reader.read_workbook_str(xml).unwrap();

    let labels = |name: &str| -> Vec<String> {
        workbook
            .worksheet_by_name(name)
            .unwrap()
            .table()
            .unwrap()
            .cells()
            .map(|(addr, _)| addr.label())
            .collect()
    };
    assert_eq!(labels("Data"), vec!["B1"]);
    assert_eq!(labels("Other"), vec!["A1"]);
}
