//! Document root builder

use sheetml_core::{DocumentProperties, ExcelWorkbook, NamedRange, Worksheet};

use crate::bind::downcast;
use crate::error::ReadResult;
use crate::session::SessionContext;
use crate::xml::{Attributes, ElementName};

use super::{Builder, Built, Frame, Step, WorksheetBuilder};

/// Handles the children of `Workbook`
///
/// This is the bottom frame of every read, so a document whose root is not
/// literally `Workbook` is still read.
#[derive(Debug, Default)]
pub(crate) struct WorkbookBuilder {
    sheet_count: usize,
}

fn worksheet_from(attrs: &Attributes) -> Worksheet {
    let mut sheet = Worksheet::new(attrs.get("Name").unwrap_or_default());
    sheet.set_protected(attrs.get_flag("Protected").unwrap_or(false));
    sheet.set_right_to_left(attrs.get_flag("RightToLeft").unwrap_or(false));
    sheet
}

impl Builder for WorkbookBuilder {
    fn start_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
        attrs: &Attributes,
    ) -> ReadResult<Step> {
        match name.local() {
            "Workbook" | "Names" => Ok(Step::Stay),
            "DocumentProperties" => {
                Ok(ctx
                    .pool
                    .push(name, Box::new(DocumentProperties::default()), attrs))
            }
            "ExcelWorkbook" => Ok(ctx.pool.push(name, Box::new(ExcelWorkbook::default()), attrs)),
            "NamedRange" => Ok(ctx.pool.push(name, Box::new(NamedRange::default()), attrs)),
            "Worksheet" => {
                let sheet = worksheet_from(attrs);
                let index = self.sheet_count;
                self.sheet_count += 1;

                log::debug!("reading worksheet {index} '{}'", sheet.name());
                ctx.scope.enter_sheet(index, sheet.name());
                ctx.dispatch(|l, scope| l.start_worksheet(scope, &sheet))?;
                Ok(Step::Push(Frame::Worksheet(WorksheetBuilder::new())))
            }
            _ => Ok(Step::skip(name)),
        }
    }

    fn end_element(
        &mut self,
        _ctx: &mut SessionContext<'_>,
        _name: &ElementName,
    ) -> ReadResult<Step> {
        Ok(Step::Stay)
    }

    fn child_built(&mut self, ctx: &mut SessionContext<'_>, built: Built) -> ReadResult<()> {
        let Built::Object { name, target } = built else {
            return Ok(());
        };
        match name.as_str() {
            "DocumentProperties" => {
                if let Some(properties) = downcast::<DocumentProperties>(target) {
                    ctx.dispatch(|l, scope| l.document_properties(scope, &properties))?;
                }
            }
            "ExcelWorkbook" => {
                if let Some(settings) = downcast::<ExcelWorkbook>(target) {
                    ctx.dispatch(|l, scope| l.excel_workbook(scope, &settings))?;
                }
            }
            "NamedRange" => {
                if let Some(range) = downcast::<NamedRange>(target) {
                    ctx.dispatch(|l, scope| l.named_range(scope, &range))?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
