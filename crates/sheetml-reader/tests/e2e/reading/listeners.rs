//! Listener registration and fan-out.
//!
//! Fixture: `multi_sheet.xml`

use std::fs;

use pretty_assertions::assert_eq;
use sheetml_core::{Cell, Worksheet};
use sheetml_reader::{ReadError, ReadResult, ReadScope, ReaderListener, SheetReader};

use crate::{event_log, events_of, multi_sheet, single_sheet, Recorder};

#[test]
fn test_every_listener_sees_every_unit_once() {
    let log = event_log();
    let mut reader = SheetReader::new();
    reader.add_listener(Box::new(Recorder::new("a", &log)));
    reader.add_listener(Box::new(Recorder::new("b", &log)));
    reader.read_file(multi_sheet()).expect("Failed to read fixture");

    let a = events_of(&log, "a");
    let b = events_of(&log, "b");
    assert_eq!(a, b);

    // Units are delivered to a then b before the next unit starts
    let lines = log.borrow();
    assert_eq!(lines.len(), a.len() * 2);
    for pair in lines.chunks(2) {
        assert!(pair[0].starts_with("a:"), "out of order: {pair:?}");
        assert!(pair[1].starts_with("b:"), "out of order: {pair:?}");
        assert_eq!(&pair[0][2..], &pair[1][2..]);
    }

    assert_eq!(a.first().map(String::as_str), Some("start"));
    assert_eq!(a.last().map(String::as_str), Some("end"));
    let sheets: Vec<&String> = a.iter().filter(|e| e.starts_with("sheet ")).collect();
    assert_eq!(sheets, vec!["sheet Grid #0", "sheet Notes #1", "sheet Empty #2"]);
    assert_eq!(a.iter().filter(|e| *e == "end sheet").count(), 3);
    assert_eq!(a.iter().filter(|e| e.starts_with("row ")).count(), 19 + 3);
}

#[test]
fn test_cells_precede_their_row() {
    let xml = single_sheet(
        r#"   <Column ss:Index="2"/>
   <Row><Cell/><Cell/></Row>"#,
    );
    let log = event_log();
    SheetReader::new()
        .read_with(xml.as_bytes(), Some("memory"), &mut Recorder::new("r", &log))
        .unwrap();

    assert_eq!(
        events_of(&log, "r"),
        vec![
            "start",
            "sheet Sheet1 #0",
            "column 2",
            "cell 1:1",
            "cell 1:2",
            "row 1",
            "end sheet",
            "end"
        ]
    );
}

#[test]
fn test_read_with_runs_after_registered_listeners() {
    let log = event_log();
    let mut reader = SheetReader::new();
    reader.add_listener(Box::new(Recorder::new("registered", &log)));

    let xml = single_sheet("   <Row/>");
    reader
        .read_with(xml.as_bytes(), None, &mut Recorder::new("extra", &log))
        .unwrap();

    let lines = log.borrow();
    assert_eq!(lines[0], "registered:start");
    assert_eq!(lines[1], "extra:start");
    assert_eq!(reader.listener_count(), 1);
}

#[test]
fn test_removed_listener_is_not_notified() {
    let log = event_log();
    let mut reader = SheetReader::new();
    let kept = reader.add_listener(Box::new(Recorder::new("kept", &log)));
    let removed = reader.add_listener(Box::new(Recorder::new("removed", &log)));

    assert!(reader.remove_listener(removed).is_some());
    reader.read_str(&single_sheet("   <Row/>")).unwrap();

    assert!(events_of(&log, "removed").is_empty());
    assert_eq!(events_of(&log, "kept").len(), 5);
    assert!(reader.remove_listener(kept).is_some());
    assert_eq!(reader.listener_count(), 0);
}

/// Rejects the first cell holding the text "stop".
struct Stopper;

impl ReaderListener for Stopper {
    fn cell(&mut self, _scope: &mut ReadScope, cell: &Cell) -> ReadResult<()> {
        if cell.value.as_str() == Some("stop") {
            return Err(ReadError::listener(format!("stopped at column {}", cell.index)));
        }
        Ok(())
    }
}

#[test]
fn test_listener_error_aborts_read() {
    let xml = single_sheet(
        r#"   <Row><Cell><Data ss:Type="String">go</Data></Cell><Cell><Data ss:Type="String">stop</Data></Cell></Row>
   <Row><Cell><Data ss:Type="String">never</Data></Cell></Row>"#,
    );
    let log = event_log();
    let mut reader = SheetReader::new();
    reader.add_listener(Box::new(Stopper));
    reader.add_listener(Box::new(Recorder::new("r", &log)));

    let err = reader.read_str(&xml).unwrap_err();
    assert!(matches!(err, ReadError::Listener(ref msg) if msg == "stopped at column 2"));

    // The later listener never saw the rejected cell or anything after it
    let events = events_of(&log, "r");
    assert_eq!(events, vec!["start", "sheet Sheet1 #0", "cell 1:1"]);
}

#[test]
fn test_listener_error_aborts_model_read() {
    let xml = single_sheet(r#"   <Row><Cell><Data ss:Type="String">stop</Data></Cell></Row>"#);
    let mut reader = SheetReader::new();
    reader.add_listener(Box::new(Stopper));

    assert!(matches!(
        reader.read_workbook_str(&xml),
        Err(ReadError::Listener(_))
    ));
}

/// Counts sheets and keeps the scope's view of where it is.
#[derive(Default)]
struct SheetCounter {
    names: Vec<String>,
    sources: Vec<Option<String>>,
}

impl ReaderListener for SheetCounter {
    fn start_worksheet(&mut self, scope: &mut ReadScope, sheet: &Worksheet) -> ReadResult<()> {
        assert_eq!(scope.sheet_name(), Some(sheet.name()));
        self.names.push(sheet.name().to_string());
        self.sources.push(scope.source().map(str::to_string));
        Ok(())
    }
}

#[test]
fn test_scope_reports_source_and_sheet() {
    let xml = fs::read(multi_sheet()).unwrap();
    let mut counter = SheetCounter::default();
    SheetReader::new()
        .read_with(xml.as_slice(), Some("copy.xml"), &mut counter)
        .unwrap();

    assert_eq!(counter.names, vec!["Grid", "Notes", "Empty"]);
    assert!(counter
        .sources
        .iter()
        .all(|s| s.as_deref() == Some("copy.xml")));
}
