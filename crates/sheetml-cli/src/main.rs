//! SheetML CLI - SpreadsheetML 2003 inspection tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetml::prelude::*;
use sheetml::{Column, NamespaceMap, Row};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetml")]
#[command(
    author,
    version,
    about = "SpreadsheetML 2003 (Excel XML) inspection tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump a worksheet as CSV to stdout or file
    #[command(visible_alias = "to-csv", alias = "csv")]
    Dump {
        /// Input SpreadsheetML file
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Sheet index to convert (0-based, default: 0)
        #[arg(short, long, default_value = "0")]
        sheet: usize,

        /// Only read cells inside this area, e.g. "B2:F40"
        #[arg(short, long)]
        area: Option<String>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Show information about a workbook
    Info {
        /// Input SpreadsheetML file
        input: PathBuf,
    },

    /// List all sheets in a workbook
    Sheets {
        /// Input SpreadsheetML file
        input: PathBuf,
    },

    /// Print the reader's callbacks as they happen, without building a model
    Events {
        /// Input SpreadsheetML file
        input: PathBuf,

        /// Only report units inside this area, e.g. "B2:F40"
        #[arg(short, long)]
        area: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dump {
            input,
            output,
            sheet,
            area,
            delimiter,
        } => dump(&input, output.as_deref(), sheet, area.as_deref(), delimiter),
        Commands::Info { input } => show_info(&input),
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Events { input, area } => print_events(&input, area.as_deref()),
    }
}

fn reader_for(area: Option<&str>) -> Result<SheetReader> {
    let mut reader = SheetReader::new();
    if let Some(label) = area {
        reader
            .set_read_area_label(label)
            .with_context(|| format!("Invalid area '{}'", label))?;
    }
    Ok(reader)
}

fn open(input: &Path, area: Option<&str>) -> Result<Workbook> {
    reader_for(area)?
        .read_workbook_file(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))
}

fn dump(
    input: &Path,
    output: Option<&Path>,
    sheet_idx: usize,
    area: Option<&str>,
    delimiter: char,
) -> Result<()> {
    let workbook = open(input, area)?;

    let sheet = workbook
        .worksheet(sheet_idx)
        .with_context(|| format!("Sheet index {} not found", sheet_idx))?;

    let used = match sheet.used_area() {
        Some(used) => used,
        None => {
            eprintln!("Warning: Sheet appears to be empty");
            return Ok(());
        }
    };

    // Build CSV output
    let mut csv_output = String::new();

    for row in used.first_row()..=used.last_row() {
        let mut first = true;
        for col in used.first_column()..=used.last_column() {
            if !first {
                csv_output.push(delimiter);
            }
            first = false;

            if let Some(cell) = sheet.cell_at(row, col) {
                csv_output.push_str(&cell_value_to_csv_string(&cell.value, delimiter));
            }
        }
        csv_output.push('\n');
    }

    // Output
    if let Some(output_path) = output {
        std::fs::write(output_path, &csv_output)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} rows to '{}'", used.row_count(), output_path.display());
    } else {
        io::stdout()
            .write_all(csv_output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

/// Convert a CellValue to a CSV-safe string
fn cell_value_to_csv_string(value: &CellValue, delimiter: char) -> String {
    let text = match value {
        CellValue::Empty => String::new(),
        CellValue::Number(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        CellValue::String(s) => s.to_string(),
        CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        CellValue::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        CellValue::Error(e) => e.to_string(),
    };

    // Quote if necessary
    if text.contains(delimiter) || text.contains('"') || text.contains('\n') || text.contains('\r')
    {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text
    }
}

fn show_info(input: &Path) -> Result<()> {
    let workbook = open(input, None)?;

    println!("File: {}", input.display());
    if let Some(props) = workbook.properties() {
        if let Some(title) = &props.title {
            println!("Title: {}", title);
        }
        if let Some(author) = &props.author {
            println!("Author: {}", author);
        }
    }
    println!("Sheets: {}", workbook.sheet_count());
    println!("Names: {}", workbook.named_ranges().len());

    for (i, sheet) in workbook.worksheets().enumerate() {
        println!();
        println!("  Sheet {}: \"{}\"", i, sheet.name());

        match sheet.used_area() {
            Some(used) => println!(
                "    Used area: {} ({} rows x {} columns)",
                used.absolute_ref(),
                used.row_count(),
                used.column_count()
            ),
            None => println!("    Used area: empty"),
        }

        let formula_count = sheet
            .table()
            .map(|t| t.cells().filter(|(_, c)| c.has_formula()).count())
            .unwrap_or(0);
        println!("    Formulas: {}", formula_count);

        if sheet.is_protected() {
            println!("    Protected");
        }
        if let Some(range) = sheet.auto_filter() {
            println!("    AutoFilter: {}", range);
        }
    }

    Ok(())
}

fn list_sheets(input: &Path) -> Result<()> {
    let workbook = open(input, None)?;

    for (i, name) in workbook.sheet_names().into_iter().enumerate() {
        println!("{}\t{}", i, name);
    }

    Ok(())
}

/// Writes one line per callback
struct EventPrinter<W: Write> {
    out: W,
}

impl<W: Write> EventPrinter<W> {
    fn line(&mut self, text: std::fmt::Arguments<'_>) -> ReadResult<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

impl<W: Write> ReaderListener for EventPrinter<W> {
    fn start_document(&mut self, scope: &mut ReadScope) -> ReadResult<()> {
        self.line(format_args!(
            "document {}",
            scope.source().unwrap_or("<stdin>")
        ))
    }

    fn start_worksheet(&mut self, scope: &mut ReadScope, sheet: &Worksheet) -> ReadResult<()> {
        self.line(format_args!(
            "worksheet #{} \"{}\"",
            scope.sheet_index().unwrap_or(0),
            sheet.name()
        ))
    }

    fn column(&mut self, _scope: &mut ReadScope, column: &Column) -> ReadResult<()> {
        self.line(format_args!("  column {}", column.index))
    }

    fn row(&mut self, _scope: &mut ReadScope, row: &Row) -> ReadResult<()> {
        self.line(format_args!("  row {} ({} cells)", row.index, row.cell_count()))
    }

    fn cell(&mut self, scope: &mut ReadScope, cell: &Cell) -> ReadResult<()> {
        let addr = Address::new(scope.row_index().unwrap_or(0), cell.index);
        self.line(format_args!("    cell {} = {:?}", addr.label(), cell.value))
    }

    fn end_worksheet(&mut self, _scope: &mut ReadScope) -> ReadResult<()> {
        self.line(format_args!("end worksheet"))
    }

    fn end_document(&mut self, _scope: &mut ReadScope, namespaces: &NamespaceMap) -> ReadResult<()> {
        for (prefix, uri) in namespaces.iter() {
            self.line(format_args!("xmlns:{} = {}", prefix, uri))?;
        }
        self.out.flush()?;
        Ok(())
    }
}

fn print_events(input: &Path, area: Option<&str>) -> Result<()> {
    let mut reader = reader_for(area)?;
    let stdout = io::stdout();
    let mut printer = EventPrinter {
        out: BufWriter::new(stdout.lock()),
    };

    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;
    reader
        .read_with(
            io::BufReader::new(file),
            Some(&input.to_string_lossy()),
            &mut printer,
        )
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    Ok(())
}
