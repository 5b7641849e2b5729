//! Row builder

use sheetml_core::{Cell, Row};

use crate::error::ReadResult;
use crate::session::SessionContext;
use crate::xml::{Attributes, ElementName};

use super::{next_index, Builder, Built, CellBuilder, Frame, Step};

/// Collects the included cells of one row
#[derive(Debug)]
pub(crate) struct RowBuilder {
    row: Row,
    next_column: u32,
}

impl RowBuilder {
    pub(crate) fn new(row: Row) -> Self {
        Self {
            row,
            next_column: 1,
        }
    }
}

fn cell_from(index: u32, explicit: bool, merge_across: u32, attrs: &Attributes) -> Cell {
    let mut cell = Cell::new(index);
    cell.explicit_index = explicit;
    cell.merge_across = merge_across;
    cell.merge_down = attrs.get_u32("MergeDown").unwrap_or(0);
    cell.style_id = attrs.get_string("StyleID");
    cell.formula = attrs.get_string("Formula");
    cell.array_range = attrs.get_string("ArrayRange");
    cell.href = attrs.get_string("HRef");
    cell.href_screen_tip = attrs.get_string("HRefScreenTip");
    cell
}

impl Builder for RowBuilder {
    fn start_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
        attrs: &Attributes,
    ) -> ReadResult<Step> {
        if !name.is("Cell") {
            return Ok(Step::skip(name));
        }

        let merge_across = attrs.get_u32("MergeAcross").unwrap_or(0);
        let (index, explicit) = next_index(attrs, &mut self.next_column, merge_across);
        if !ctx.scope.includes_column(index) {
            return Ok(Step::skip(name));
        }

        let cell = cell_from(index, explicit, merge_across, attrs);
        Ok(Step::Push(Frame::Cell(CellBuilder::new(cell))))
    }

    fn end_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
    ) -> ReadResult<Step> {
        if !name.is("Row") {
            return Ok(Step::Stay);
        }

        let row = std::mem::replace(&mut self.row, Row::new(0));
        ctx.dispatch(|l, scope| l.row(scope, &row))?;
        ctx.scope.leave_row();
        Ok(Step::Pop(None))
    }

    fn child_built(&mut self, _ctx: &mut SessionContext<'_>, built: Built) -> ReadResult<()> {
        if let Built::Cell(cell) = built {
            self.row.insert_cell(cell);
        }
        Ok(())
    }
}
