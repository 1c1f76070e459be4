//! Display hosts for the pager buffers.
//!
//! When the `visualizer-gtk` feature is enabled, the
//! [`gtk::run_main_loop`] function takes over the main thread, shows every
//! pager in a layer-shell tray window, and feeds pointer input back into the
//! pagers through the GLib main loop.

#[cfg(feature = "visualizer-gtk")]
pub mod gtk;
