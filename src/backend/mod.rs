//! Concrete [`WindowManager`](crate::traits::WindowManager) backends.
//!
//! The pager itself never talks to a window manager directly; the binary
//! plugs one of these in.

pub mod scene;
