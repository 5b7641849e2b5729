//! Cell builder

use sheetml_core::{Cell, CellValue, Comment, DataType};

use crate::bind::downcast;
use crate::error::ReadResult;
use crate::session::SessionContext;
use crate::xml::{Attributes, ElementName};

use super::{Builder, Built, LeafEnd, LeafText, Step};

/// Reads the `Data`, `Comment` and `NamedCell` children of a cell
#[derive(Debug)]
pub(crate) struct CellBuilder {
    cell: Cell,
    data_type: Option<DataType>,
    leaf: LeafText,
}

impl CellBuilder {
    pub(crate) fn new(cell: Cell) -> Self {
        Self {
            cell,
            data_type: None,
            leaf: LeafText::default(),
        }
    }

    fn set_data(&mut self, text: String) {
        let data_type = self.data_type.unwrap_or(DataType::String);
        let blank = text.is_empty() || (data_type != DataType::String && text.trim().is_empty());
        if blank {
            self.cell.value = CellValue::Empty;
            return;
        }
        self.cell.value = match CellValue::parse(data_type, &text) {
            Some(value) => value,
            None => {
                log::debug!(
                    "cell {} holds {text:?}, not a valid {data_type}; keeping it as text",
                    self.cell.index
                );
                CellValue::String(text)
            }
        };
    }
}

impl Builder for CellBuilder {
    fn start_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
        attrs: &Attributes,
    ) -> ReadResult<Step> {
        if self.leaf.nest() {
            return Ok(Step::Stay);
        }
        match name.local() {
            "Data" => {
                self.data_type = attrs.get("Type").and_then(DataType::from_name);
                self.leaf.open(name.local());
                Ok(Step::Stay)
            }
            "Comment" => Ok(ctx.pool.push(name, Box::new(Comment::default()), attrs)),
            "NamedCell" => {
                if let Some(named) = attrs.get("Name") {
                    self.cell.named_cells.push(named.to_string());
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
        match self.leaf.close() {
            LeafEnd::Inner => Ok(Step::Stay),
            LeafEnd::Closed { text, .. } => {
                self.set_data(text);
                Ok(Step::Stay)
            }
            LeafEnd::Outside if name.is("Cell") => {
                let cell = std::mem::replace(&mut self.cell, Cell::new(0));
                ctx.dispatch(|l, scope| l.cell(scope, &cell))?;
                Ok(Step::Pop(Some(Built::Cell(cell))))
            }
            LeafEnd::Outside => Ok(Step::Stay),
        }
    }

    fn characters(&mut self, text: &str) {
        self.leaf.push(text);
    }

    fn child_built(&mut self, _ctx: &mut SessionContext<'_>, built: Built) -> ReadResult<()> {
        if let Built::Object { target, .. } = built {
            self.cell.comment = downcast::<Comment>(target);
        }
        Ok(())
    }
}
