//! Malformed input.

use sheetml_reader::{ReadError, SheetReader};

use crate::{event_log, events_of, Recorder};

const HEAD: &str = r#"<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">"#;

#[test]
fn test_duplicate_sheet_name() {
    let xml = format!(
        r#"{HEAD}
 <Worksheet ss:Name="Data"/>
 <Worksheet ss:Name="DATA"/>
</Workbook>"#
    );
    let err = SheetReader::new().read_workbook_str(&xml).unwrap_err();
    assert!(matches!(
        err,
        ReadError::Core(sheetml_core::Error::DuplicateSheetName(ref name)) if name == "DATA"
    ));

    // The event path has no model to conflict with
    assert!(SheetReader::new().read_str(&xml).is_ok());
}

#[test]
fn test_unclosed_element() {
    let xml = format!("{HEAD}\n <Worksheet ss:Name=\"Data\">\n  <Table>\n");
    let log = event_log();
    let result = SheetReader::new().read_with(xml.as_bytes(), None, &mut Recorder::new("r", &log));

    assert!(result.is_err());
    assert!(!events_of(&log, "r").contains(&"end".to_string()));
}

#[test]
fn test_mismatched_tags() {
    let xml = format!("{HEAD}\n <Worksheet ss:Name=\"Data\"></Table>\n</Workbook>");
    assert!(matches!(
        SheetReader::new().read_str(&xml),
        Err(ReadError::Xml(_))
    ));
}

#[test]
fn test_unknown_prefix() {
    let xml = format!("{HEAD}\n <Worksheet zz:Name=\"Data\"/>\n</Workbook>");
    assert!(matches!(
        SheetReader::new().read_str(&xml),
        Err(ReadError::Markup(_))
    ));
}

#[test]
fn test_missing_file() {
    let err = SheetReader::new()
        .read_workbook_file("does/not/exist.xml")
        .unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}

#[test]
fn test_empty_document() {
    assert!(SheetReader::new().read_str("").is_err());
}
