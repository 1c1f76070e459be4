//! **deskpager**: a desktop pager tray component.
//!
//! A pager is a miniature map of every virtual desktop: one cell per
//! desktop, the current desktop highlighted, and every visible client
//! window drawn as a small rectangle scaled into its desktop's cell.
//! Clicking a cell switches to that desktop; the scroll wheel steps through
//! them.
//!
//! # Architecture
//!
//! The crate is organised around three traits:
//!
//! * [`traits::WindowManager`]: the desktops, screen size and client list
//!   the pager shows, and the desktop switches it requests.
//! * [`traits::DrawSurface`]: fill / outline / line primitives, so the
//!   layout and clipping logic can be tested without a display server.
//! * [`traits::Tray`]: the container that shows a component once it has
//!   been repainted.
//!
//! [`pager::PagerSet`] owns every pager instance and drives their
//! lifecycle.  [`layout::PagerLayout`] holds the geometry.  Each pager
//! paints into its own [`canvas::Canvas`].  A JSON-scene backend lives in
//! [`backend`] and an optional GTK host in [`visualizer`].

pub mod backend;
pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod pager;
pub mod traits;
pub mod tray;
pub mod visualizer;
