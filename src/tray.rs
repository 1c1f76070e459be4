//! The generic tray-component wrapper a pager plugs into.
//!
//! A [`TrayComponent`] carries what every tray widget shares: an id the
//! tray uses to refer back to it, the size the tray allotted, and the
//! offscreen buffer the widget paints into.

use crate::canvas::Canvas;
use std::fmt;

/// Opaque handle identifying one tray component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub(crate) u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component#{}", self.0)
    }
}

/// Shared geometry and buffer of a tray widget.
#[derive(Debug)]
pub struct TrayComponent {
    id: ComponentId,
    width: u32,
    height: u32,
    buffer: Option<Canvas>,
}

impl TrayComponent {
    pub fn new(id: ComponentId) -> Self {
        Self {
            id,
            width: 0,
            height: 0,
            buffer: None,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Current size as `(width, height)`; `(0, 0)` until sized.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub(crate) fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// The offscreen buffer, once created.
    pub fn buffer(&self) -> Option<&Canvas> {
        self.buffer.as_ref()
    }

    pub(crate) fn buffer_mut(&mut self) -> Option<&mut Canvas> {
        self.buffer.as_mut()
    }

    /// Install a new buffer, returning the previous one if there was one.
    pub(crate) fn replace_buffer(&mut self, buffer: Canvas) -> Option<Canvas> {
        self.buffer.replace(buffer)
    }

    /// Drop the buffer.  Returns whether one was held.
    pub(crate) fn release_buffer(&mut self) -> bool {
        self.buffer.take().is_some()
    }
}
