//! End-to-end tests for opening workbooks through the facade

use std::fs;

use pretty_assertions::assert_eq;
use sheetml::prelude::*;

const INVENTORY: &str = r#"<?xml version="1.0"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:o="urn:schemas-microsoft-com:office:office"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <DocumentProperties xmlns="urn:schemas-microsoft-com:office:office">
  <Author>Stock Room</Author>
 </DocumentProperties>
 <Worksheet ss:Name="Stock">
  <Table>
   <Row>
    <Cell><Data ss:Type="String">Item</Data></Cell>
    <Cell><Data ss:Type="String">Count</Data></Cell>
   </Row>
   <Row>
    <Cell><Data ss:Type="String">Bolts</Data></Cell>
    <Cell><Data ss:Type="Number">120</Data></Cell>
   </Row>
   <Row>
    <Cell><Data ss:Type="String">Nuts</Data></Cell>
    <Cell><Data ss:Type="Number">75</Data></Cell>
   </Row>
  </Table>
 </Worksheet>
</Workbook>"#;

fn write_inventory(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("inventory.xml");
    fs::write(&path, INVENTORY).unwrap();
    path
}

#[test]
fn test_open_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_inventory(&dir);

    let workbook = Workbook::open(&path).unwrap();
    assert_eq!(workbook.name(), Some("inventory"));
    assert_eq!(
        workbook.properties().unwrap().author.as_deref(),
        Some("Stock Room")
    );

    let stock = workbook.worksheet(0).unwrap();
    assert_eq!(stock.name(), "Stock");
    assert_eq!(stock.value("A2"), CellValue::string("Bolts"));
    assert_eq!(stock.value("B3").as_number(), Some(75.0));
}

#[test]
fn test_open_area() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_inventory(&dir);

    let workbook = Workbook::open_area(&path, Area::parse("B2:B3").unwrap()).unwrap();
    let stock = workbook.worksheet(0).unwrap();

    let cells: Vec<(String, Option<f64>)> = stock
        .table()
        .unwrap()
        .cells()
        .map(|(addr, cell)| (addr.label(), cell.value.as_number()))
        .collect();
    assert_eq!(
        cells,
        vec![("B2".to_string(), Some(120.0)), ("B3".to_string(), Some(75.0))]
    );
}

#[test]
fn test_open_missing_file() {
    let err = Workbook::open("no/such/inventory.xml").unwrap_err();
    assert!(matches!(err, ReadError::Io(_)));
}

#[test]
fn test_from_xml_str() {
    let workbook = Workbook::from_xml_str(INVENTORY).unwrap();
    assert_eq!(workbook.name(), None);
    assert_eq!(workbook.sheet_names(), vec!["Stock"]);
    assert_eq!(
        workbook.worksheet_by_name("Stock").unwrap().used_area(),
        Some(Area::new(1, 1, 3, 2))
    );
}
