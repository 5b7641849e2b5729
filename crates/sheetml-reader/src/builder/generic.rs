//! Builder for value objects filled in by name
//!
//! Attributes of the element and the text of its leaf children are bound
//! through the target's [`Bindings`](crate::bind::Bindings) table. Children
//! the table knows as compounds get a nested generic frame of their own.
//! Everything else is ignored.

use crate::bind::Bindable;
use crate::error::ReadResult;
use crate::session::SessionContext;
use crate::xml::{Attributes, ElementName};

use super::{Builder, Built, Frame, LeafEnd, LeafText, Step};

/// Free list of generic builders, reused across elements and sheets
#[derive(Default)]
pub(crate) struct GenericPool {
    free: Vec<GenericBuilder>,
    allocated: usize,
}

impl GenericPool {
    /// Take a builder for `element`, binding the element's attributes
    pub(crate) fn acquire(
        &mut self,
        element: &str,
        target: Box<dyn Bindable>,
        attrs: &Attributes,
    ) -> GenericBuilder {
        let mut builder = self.free.pop().unwrap_or_else(|| {
            self.allocated += 1;
            GenericBuilder::default()
        });
        builder.begin(element, target, attrs);
        builder
    }

    pub(crate) fn release(&mut self, mut builder: GenericBuilder) {
        builder.clear();
        self.free.push(builder);
    }

    /// Number of builders ever created by this pool
    pub(crate) fn allocated(&self) -> usize {
        self.allocated
    }

    /// Open a generic frame for an element
    pub(crate) fn push(
        &mut self,
        name: &ElementName,
        target: Box<dyn Bindable>,
        attrs: &Attributes,
    ) -> Step {
        Step::Push(Frame::Generic(self.acquire(name.local(), target, attrs)))
    }
}

#[derive(Default)]
pub(crate) struct GenericBuilder {
    element: String,
    target: Option<Box<dyn Bindable>>,
    leaf: LeafText,
}

impl GenericBuilder {
    fn begin(&mut self, element: &str, mut target: Box<dyn Bindable>, attrs: &Attributes) {
        self.element.clear();
        self.element.push_str(element);
        for attr in attrs.iter() {
            if !target.bind_value(attr.local(), attr.value()) {
                log::trace!("<{element}> ignores attribute {}", attr.local());
            }
        }
        self.target = Some(target);
    }

    fn clear(&mut self) {
        self.element.clear();
        self.target = None;
        self.leaf.reset();
    }
}

impl Builder for GenericBuilder {
    fn start_element(
        &mut self,
        ctx: &mut SessionContext<'_>,
        name: &ElementName,
        attrs: &Attributes,
    ) -> ReadResult<Step> {
        if self.leaf.nest() {
            return Ok(Step::Stay);
        }
        let compound = self
            .target
            .as_ref()
            .and_then(|t| t.open_compound(name.local()));
        match compound {
            Some(child) => Ok(ctx.pool.push(name, child, attrs)),
            None => {
                self.leaf.open(name.local());
                Ok(Step::Stay)
            }
        }
    }

    fn end_element(
        &mut self,
        _ctx: &mut SessionContext<'_>,
        name: &ElementName,
    ) -> ReadResult<Step> {
        match self.leaf.close() {
            LeafEnd::Inner => Ok(Step::Stay),
            LeafEnd::Closed { name: leaf, text } => {
                if let Some(target) = self.target.as_mut() {
                    if !target.bind_value(&leaf, &text) {
                        log::trace!("<{}> ignores child <{leaf}>", self.element);
                    }
                }
                Ok(Step::Stay)
            }
            LeafEnd::Outside if name.is(&self.element) => {
                let built = self.target.take().map(|target| Built::Object {
                    name: self.element.clone(),
                    target,
                });
                Ok(Step::Pop(built))
            }
            LeafEnd::Outside => Ok(Step::Stay),
        }
    }

    fn characters(&mut self, text: &str) {
        self.leaf.push(text);
    }

    fn child_built(&mut self, _ctx: &mut SessionContext<'_>, built: Built) -> ReadResult<()> {
        if let (Built::Object { name, target: child }, Some(target)) = (built, self.target.as_mut())
        {
            if !target.bind_compound(&name, child) {
                log::trace!("<{}> ignores child <{name}>", self.element);
            }
        }
        Ok(())
    }
}
