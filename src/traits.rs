//! Core traits that decouple deskpager from any specific window manager,
//! tray container, or graphics library.
//!
//! Every concrete backend (the JSON scene, a GTK host, a test harness, …)
//! implements one of these traits.  The [`PagerSet`](crate::pager::PagerSet)
//! only depends on these abstractions.

use crate::color::Color;
use crate::command::{ClientInfo, ScreenSize};
use crate::geometry::{Point, Rect};
use crate::tray::ComponentId;

/// Abstraction over the window manager whose desktops the pager shows.
///
/// The read accessors describe state the pager consumes without changing
/// it.  The three desktop-switching methods are the only mutation the pager
/// ever asks for; they take `&self` so implementations use interior
/// mutability.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Size of the root window.
    fn screen(&self) -> ScreenSize;

    /// Number of virtual desktops.
    fn desktop_count(&self) -> usize;

    /// Index of the desktop currently shown.
    fn current_desktop(&self) -> usize;

    /// Every client window, ordered from the bottom stacking layer to the
    /// top, and within a layer from the bottom-most window to the top-most.
    ///
    /// The pager paints them in this order so higher windows cover lower
    /// ones.
    fn clients(&self) -> Vec<ClientInfo>;

    /// Switch to the desktop at `desktop`.
    fn change_desktop(&self, desktop: usize) -> Result<(), Self::Error>;

    /// Switch to the previous desktop.
    fn previous_desktop(&self) -> Result<(), Self::Error>;

    /// Switch to the next desktop.
    fn next_desktop(&self) -> Result<(), Self::Error>;
}

/// A retained-mode drawing target.
///
/// The primitives follow X11 semantics so pixel output matches a classic
/// window manager tray:
///
/// * [`fill_rect`](DrawSurface::fill_rect) covers `width × height` pixels.
/// * [`draw_rect`](DrawSurface::draw_rect) outlines `(width + 1) × (height + 1)`
///   pixels, i.e. the right and bottom edges sit at `x + width` / `y + height`.
/// * [`draw_line`](DrawSurface::draw_line) includes both end points.
///
/// Implementations clip to their own bounds.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, from: Point, to: Point, color: Color);
}

/// The tray container a pager component lives in.
pub trait Tray {
    /// Notify the tray that `component` has a freshly drawn buffer and its
    /// region needs to be shown again.
    fn redraw(&mut self, component: ComponentId);
}
