//! Common utilities for E2E tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use sheetml_core::{Cell, Column, Row, Worksheet};
use sheetml_reader::{ReadResult, ReadScope, ReaderListener};

/// Path to a file in `tests/fixtures/`.
pub fn fixture_path(filename: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Path to the shared multi-sheet fixture.
pub fn multi_sheet() -> PathBuf {
    fixture_path("multi_sheet.xml")
}

/// Wrap rows in a one-sheet workbook called `Sheet1`.
pub fn single_sheet(rows: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <Worksheet ss:Name="Sheet1">
  <Table>
{rows}
  </Table>
 </Worksheet>
</Workbook>"#
    )
}

/// Shared event log, one line per callback.
pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Listener that writes `tag:event` lines into a shared log.
pub struct Recorder {
    tag: &'static str,
    log: EventLog,
}

impl Recorder {
    pub fn new(tag: &'static str, log: &EventLog) -> Self {
        Self {
            tag,
            log: log.clone(),
        }
    }

    fn push(&self, event: String) {
        self.log.borrow_mut().push(format!("{}:{event}", self.tag));
    }
}

impl ReaderListener for Recorder {
    fn start_document(&mut self, _scope: &mut ReadScope) -> ReadResult<()> {
        self.push("start".into());
        Ok(())
    }

    fn start_worksheet(&mut self, scope: &mut ReadScope, sheet: &Worksheet) -> ReadResult<()> {
        self.push(format!(
            "sheet {} #{}",
            sheet.name(),
            scope.sheet_index().unwrap_or(usize::MAX)
        ));
        Ok(())
    }

    fn column(&mut self, _scope: &mut ReadScope, column: &Column) -> ReadResult<()> {
        self.push(format!("column {}", column.index));
        Ok(())
    }

    fn row(&mut self, _scope: &mut ReadScope, row: &Row) -> ReadResult<()> {
        self.push(format!("row {}", row.index));
        Ok(())
    }

    fn cell(&mut self, scope: &mut ReadScope, cell: &Cell) -> ReadResult<()> {
        self.push(format!(
            "cell {}:{}",
            scope.row_index().unwrap_or(0),
            cell.index
        ));
        Ok(())
    }

    fn end_worksheet(&mut self, _scope: &mut ReadScope) -> ReadResult<()> {
        self.push("end sheet".into());
        Ok(())
    }

    fn end_document(
        &mut self,
        _scope: &mut ReadScope,
        _namespaces: &sheetml_reader::NamespaceMap,
    ) -> ReadResult<()> {
        self.push("end".into());
        Ok(())
    }
}

/// Lines of the log recorded by one tag, with the tag stripped.
#[allow(dead_code)]
pub fn events_of(log: &EventLog, tag: &str) -> Vec<String> {
    let prefix = format!("{tag}:");
    log.borrow()
        .iter()
        .filter_map(|line| line.strip_prefix(&prefix).map(str::to_string))
        .collect()
}
