//! Worksheet builder: table, columns, rows and sheet-level extras

use sheetml_core::{Column, NamedRange, Row, Table, WorksheetOptions};

use crate::bind::downcast;
use crate::error::ReadResult;
use crate::session::SessionContext;
use crate::xml::{Attributes, ElementName};

use super::{next_index, Builder, Built, Frame, RowBuilder, Step};

/// Handles everything inside `Worksheet`, including the `Table` element
#[derive(Debug)]
pub(crate) struct WorksheetBuilder {
    next_row: u32,
    next_column: u32,
    pending_column: Option<Column>,
}

impl WorksheetBuilder {
    pub(crate) fn new() -> Self {
        Self {
            next_row: 1,
            next_column: 1,
            pending_column: None,
        }
    }

    fn column(&mut self, ctx: &mut SessionContext<'_>, name: &ElementName, attrs: &Attributes) -> Step {
        let span = attrs.get_u32("Span").unwrap_or(0);
        let (index, explicit) = next_index(attrs, &mut self.next_column, span);
        if !ctx.scope.includes_column(index) {
            return Step::skip(name);
        }

        let mut column = Column::new(index);
        column.explicit_index = explicit;
        column.width = attrs.get_f64("Width");
        column.hidden = attrs.get_flag("Hidden").unwrap_or(false);
        column.auto_fit_width = attrs.get_flag("AutoFitWidth");
        column.style_id = attrs.get_string("StyleID");
        column.span = span;
        self.pending_column = Some(column);
        Step::Stay
    }

    fn row(&mut self, ctx: &mut SessionContext<'_>, name: &ElementName, attrs: &Attributes) -> Step {
        let span = attrs.get_u32("Span").unwrap_or(0);
        let (index, explicit) = next_index(attrs, &mut self.next_row, span);
        if !ctx.scope.includes_row(index) {
            return Step::skip(name);
        }

        let mut row = Row::new(index);
        row.explicit_index = explicit;
        row.height = attrs.get_f64("Height");
        row.hidden = attrs.get_flag("Hidden").unwrap_or(false);
        row.auto_fit_height = attrs.get_flag("AutoFitHeight");
        row.style_id = attrs.get_string("StyleID");
        row.span = span;

        ctx.scope.enter_row(index);
        Step::Push(Frame::Row(RowBuilder::new(row)))
    }
}

fn table_from(attrs: &Attributes) -> Table {
    let mut table = Table::new();
    table.expanded_column_count = attrs.get_u32("ExpandedColumnCount");
    table.expanded_row_count = attrs.get_u32("ExpandedRowCount");
    table.full_columns = attrs.get_flag("FullColumns").unwrap_or(false);
    table.full_rows = attrs.get_flag("FullRows").unwrap_or(false);
    table.style_id = attrs.get_string("StyleID");
    table.default_column_width = attrs.get_f64("DefaultColumnWidth");
    table.default_row_height = attrs.get_f64("DefaultRowHeight");
    table.left_cell = attrs.get_u32("LeftCell");
    table.top_cell = attrs.get_u32("TopCell");
    table
}

impl Builder for WorksheetBuilder {
    fn start_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
        attrs: &Attributes,
    ) -> ReadResult<Step> {
        match name.local() {
            "Table" => {
                let table = table_from(attrs);
                ctx.dispatch(|l, scope| l.start_table(scope, &table))?;
                Ok(Step::Stay)
            }
            "Column" => Ok(self.column(ctx, name, attrs)),
            "Row" => Ok(self.row(ctx, name, attrs)),
            "Names" => Ok(Step::Stay),
            "NamedRange" => Ok(ctx.pool.push(name, Box::new(NamedRange::default()), attrs)),
            "WorksheetOptions" => {
                Ok(ctx
                    .pool
                    .push(name, Box::new(WorksheetOptions::default()), attrs))
            }
            "AutoFilter" => {
                if let Some(range) = attrs.get("Range") {
                    ctx.dispatch(|l, scope| l.auto_filter(scope, range))?;
                }
                Ok(Step::skip(name))
            }
            _ => Ok(Step::skip(name)),
        }
    }

    fn end_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
    ) -> ReadResult<Step> {
        match name.local() {
            "Column" => {
                if let Some(column) = self.pending_column.take() {
                    ctx.dispatch(|l, scope| l.column(scope, &column))?;
                }
                Ok(Step::Stay)
            }
            "Worksheet" => {
                ctx.dispatch(|l, scope| l.end_worksheet(scope))?;
                ctx.scope.leave_sheet();
                Ok(Step::Pop(None))
            }
            _ => Ok(Step::Stay),
        }
    }

    fn child_built(&mut self, ctx: &mut SessionContext<'_>, built: Built) -> ReadResult<()> {
        let Built::Object { name, target } = built else {
            return Ok(());
        };
        match name.as_str() {
            "NamedRange" => {
                if let Some(range) = downcast::<NamedRange>(target) {
                    ctx.dispatch(|l, scope| l.named_range(scope, &range))?;
                }
            }
            "WorksheetOptions" => {
                if let Some(options) = downcast::<WorksheetOptions>(target) {
                    ctx.dispatch(|l, scope| l.worksheet_options(scope, &options))?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
