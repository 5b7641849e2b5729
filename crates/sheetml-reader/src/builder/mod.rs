//! Builders that turn markup events into structural units
//!
//! The session keeps one [`Frame`] per open structural element. Events go to
//! the top frame, which answers with a [`Step`]: stay, open a child frame, or
//! close itself and hand its finished unit to the frame below.

mod cell;
mod generic;
mod row;
mod workbook;
mod worksheet;

pub(crate) use cell::CellBuilder;
pub(crate) use generic::{GenericBuilder, GenericPool};
pub(crate) use row::RowBuilder;
pub(crate) use workbook::WorkbookBuilder;
pub(crate) use worksheet::WorksheetBuilder;

use sheetml_core::Cell;

use crate::bind::Bindable;
use crate::error::ReadResult;
use crate::session::SessionContext;
use crate::xml::{Attributes, ElementName};

/// What the session does after a frame handled an event
pub(crate) enum Step {
    /// Keep the current frame on top
    Stay,
    /// Open a child frame for the element just started
    Push(Frame),
    /// Close the current frame, handing its unit to the parent
    Pop(Option<Built>),
}

impl Step {
    /// Swallow the element just started and everything inside it
    pub(crate) fn skip(name: &ElementName) -> Self {
        log::trace!("skipping <{name}>");
        Step::Push(Frame::Skip(SkipBuilder::default()))
    }
}

/// A unit handed from a closing frame to its parent
pub(crate) enum Built {
    Cell(Cell),
    Object {
        name: String,
        target: Box<dyn Bindable>,
    },
}

/// Event handling shared by all frames
pub(crate) trait Builder {
    fn start_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
        attrs: &Attributes,
    ) -> ReadResult<Step>;

    fn end_element(&mut self, ctx: &mut SessionContext<'_>, name: &ElementName)
        -> ReadResult<Step>;

    fn characters(&mut self, _text: &str) {}

    fn child_built(&mut self, _ctx: &mut SessionContext<'_>, _built: Built) -> ReadResult<()> {
        Ok(())
    }
}

/// One open structural element
pub(crate) enum Frame {
    Workbook(WorkbookBuilder),
    Worksheet(WorksheetBuilder),
    Row(RowBuilder),
    Cell(CellBuilder),
    Generic(GenericBuilder),
    Skip(SkipBuilder),
}

impl Frame {
    fn builder(&mut self) -> &mut dyn Builder {
        match self {
            Frame::Workbook(b) => b,
            Frame::Worksheet(b) => b,
            Frame::Row(b) => b,
            Frame::Cell(b) => b,
            Frame::Generic(b) => b,
            Frame::Skip(b) => b,
        }
    }

    pub(crate) fn start_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
        attrs: &Attributes,
    ) -> ReadResult<Step> {
        self.builder().start_element(ctx, name, attrs)
    }

    pub(crate) fn end_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
    ) -> ReadResult<Step> {
        self.builder().end_element(ctx, name)
    }

    pub(crate) fn characters(&mut self, text: &str) {
        self.builder().characters(text)
    }

    pub(crate) fn child_built(
        &mut self,
        ctx: &mut SessionContext<'_>,
        built: Built,
    ) -> ReadResult<()> {
        self.builder().child_built(ctx, built)
    }

    /// Give pooled builders back once the frame is closed
    pub(crate) fn retire(self, pool: &mut GenericPool) {
        if let Frame::Generic(builder) = self {
            pool.release(builder);
        }
    }
}

/// Swallows an element and all of its descendants
#[derive(Debug, Default)]
pub(crate) struct SkipBuilder {
    depth: usize,
}

impl Builder for SkipBuilder {
    fn start_element(
        &mut self,
        _ctx: &mut SessionContext<'_>,
        _name: &ElementName,
        _attrs: &Attributes,
    ) -> ReadResult<Step> {
        self.depth += 1;
        Ok(Step::Stay)
    }

    fn end_element(
        &mut self,
        _ctx: &mut SessionContext<'_>,
        _name: &ElementName,
    ) -> ReadResult<Step> {
        if self.depth == 0 {
            return Ok(Step::Pop(None));
        }
        self.depth -= 1;
        Ok(Step::Stay)
    }
}

/// Resolve the index of a row, column or cell.
///
/// An explicit `ss:Index` wins and resets the running counter; either way the
/// counter moves past the unit's extent (`span` or `MergeAcross`).
pub(crate) fn next_index(attrs: &Attributes, next: &mut u32, extent: u32) -> (u32, bool) {
    let explicit = attrs.get_u32("Index").filter(|&i| i > 0);
    let index = explicit.unwrap_or(*next);
    *next = index.saturating_add(extent).saturating_add(1);
    (index, explicit.is_some())
}

/// Text of the leaf element currently open inside a builder
///
/// Elements nested inside an open leaf (HTML runs inside `Data`) only
/// contribute their text.
#[derive(Debug, Default)]
pub(crate) struct LeafText {
    open: Option<String>,
    depth: usize,
    text: String,
}

/// Outcome of an end tag seen by a [`LeafText`]
pub(crate) enum LeafEnd {
    /// No leaf was open
    Outside,
    /// A nested element closed; the leaf is still open
    Inner,
    /// The leaf closed with its buffered text
    Closed { name: String, text: String },
}

impl LeafText {
    /// Open a leaf, dropping text from any earlier sibling
    pub(crate) fn open(&mut self, name: &str) {
        self.open = Some(name.to_string());
        self.depth = 0;
        self.text.clear();
    }

    /// Account for a start tag; `true` if it is nested in the open leaf
    pub(crate) fn nest(&mut self) -> bool {
        if self.open.is_some() {
            self.depth += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn push(&mut self, text: &str) {
        if self.open.is_some() {
            self.text.push_str(text);
        }
    }

    pub(crate) fn close(&mut self) -> LeafEnd {
        match self.open.take() {
            None => LeafEnd::Outside,
            Some(name) if self.depth > 0 => {
                self.depth -= 1;
                self.open = Some(name);
                LeafEnd::Inner
            }
            Some(name) => LeafEnd::Closed {
                name,
                text: std::mem::take(&mut self.text),
            },
        }
    }

    pub(crate) fn reset(&mut self) {
        self.open = None;
        self.depth = 0;
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(index: Option<&str>) -> Attributes {
        let mut attrs = Attributes::default();
        if let Some(index) = index {
            attrs.push("Index".into(), None, index.into());
        }
        attrs
    }

    #[test]
    fn test_next_index_resets_on_explicit() {
        let mut next = 1;
        let indices: Vec<u32> = [None, None, Some("5"), None]
            .into_iter()
            .map(|i| next_index(&attrs(i), &mut next, 0).0)
            .collect();
        assert_eq!(indices, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_next_index_extent() {
        let mut next = 1;
        assert_eq!(next_index(&attrs(None), &mut next, 2), (1, false));
        assert_eq!(next_index(&attrs(None), &mut next, 0), (4, false));
        assert_eq!(next_index(&attrs(Some("2")), &mut next, 0), (2, true));
        assert_eq!(next, 3);
    }

    #[test]
    fn test_malformed_index_is_absent() {
        let mut next = 7;
        assert_eq!(next_index(&attrs(Some("x")), &mut next, 0), (7, false));
        assert_eq!(next_index(&attrs(Some("0")), &mut next, 0), (8, false));
    }

    #[test]
    fn test_leaf_text_nesting() {
        let mut leaf = LeafText::default();
        leaf.push("ignored");
        leaf.open("Data");
        leaf.push("a");
        assert!(leaf.nest());
        leaf.push("b");
        assert!(matches!(leaf.close(), LeafEnd::Inner));
        match leaf.close() {
            LeafEnd::Closed { name, text } => {
                assert_eq!(name, "Data");
                assert_eq!(text, "ab");
            }
            _ => panic!("leaf should close"),
        }
        assert!(matches!(leaf.close(), LeafEnd::Outside));
        assert!(!leaf.nest());
    }
}
