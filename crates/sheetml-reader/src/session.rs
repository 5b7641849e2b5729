//! Per-read state: the frame stack and the context frames share

use crate::builder::{Frame, GenericPool, Step, WorkbookBuilder};
use crate::error::ReadResult;
use crate::listener::{ReadScope, ReaderListener};
use crate::xml::{Attributes, ContentHandler, ElementName, NamespaceMap};

/// State every frame may touch while handling an event
pub(crate) struct SessionContext<'l> {
    pub(crate) scope: ReadScope,
    pub(crate) pool: GenericPool,
    listeners: Vec<&'l mut dyn ReaderListener>,
}

impl<'l> SessionContext<'l> {
    /// Deliver one unit to every listener in registration order
    pub(crate) fn dispatch<F>(&mut self, mut notify: F) -> ReadResult<()>
    where
        F: FnMut(&mut dyn ReaderListener, &mut ReadScope) -> ReadResult<()>,
    {
        for listener in self.listeners.iter_mut() {
            notify(&mut **listener, &mut self.scope)?;
        }
        Ok(())
    }
}

/// Turns the markup events of one document into listener callbacks
pub(crate) struct Session<'l> {
    frames: Vec<Frame>,
    ctx: SessionContext<'l>,
}

impl<'l> Session<'l> {
    pub(crate) fn new(scope: ReadScope, listeners: Vec<&'l mut dyn ReaderListener>) -> Self {
        Self {
            frames: Vec::new(),
            ctx: SessionContext {
                scope,
                pool: GenericPool::default(),
                listeners,
            },
        }
    }

    #[cfg(test)]
    fn pool(&self) -> &GenericPool {
        &self.ctx.pool
    }

    fn apply(&mut self, step: Step) -> ReadResult<()> {
        match step {
            Step::Stay => Ok(()),
            Step::Push(frame) => {
                self.frames.push(frame);
                Ok(())
            }
            Step::Pop(built) => {
                if let Some(frame) = self.frames.pop() {
                    frame.retire(&mut self.ctx.pool);
                }
                match (built, self.frames.last_mut()) {
                    (Some(built), Some(parent)) => parent.child_built(&mut self.ctx, built),
                    _ => Ok(()),
                }
            }
        }
    }
}

impl ContentHandler for Session<'_> {
    fn start_document(&mut self) -> ReadResult<()> {
        log::debug!(
            "reading {}",
            self.ctx.scope.source().unwrap_or("<stream>")
        );
        self.frames.clear();
        self.frames.push(Frame::Workbook(WorkbookBuilder::default()));
        self.ctx.dispatch(|l, scope| l.start_document(scope))
    }

    fn start_element(&mut self, name: &ElementName, attrs: &Attributes) -> ReadResult<()> {
        let step = match self.frames.last_mut() {
            Some(frame) => frame.start_element(&mut self.ctx, name, attrs)?,
            None => Step::skip(name),
        };
        self.apply(step)
    }

    fn characters(&mut self, text: &str) -> ReadResult<()> {
        if let Some(frame) = self.frames.last_mut() {
            frame.characters(text);
        }
        Ok(())
    }

    fn end_element(&mut self, name: &ElementName) -> ReadResult<()> {
        let step = match self.frames.last_mut() {
            Some(frame) => frame.end_element(&mut self.ctx, name)?,
            None => Step::Stay,
        };
        self.apply(step)
    }

    fn end_document(&mut self, namespaces: &NamespaceMap) -> ReadResult<()> {
        self.frames.clear();
        self.ctx.dispatch(|l, scope| l.end_document(scope, namespaces))?;
        log::debug!(
            "finished {} ({} pooled builders)",
            self.ctx.scope.source().unwrap_or("<stream>"),
            self.ctx.pool.allocated()
        );
        Ok(())
    }
}
