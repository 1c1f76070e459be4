//! Commands and types used throughout deskpager.
//!
//! This module defines the vocabulary that all components share:
//! [`Button`] and [`DesktopRequest`] describe input and the desktop switches
//! it produces, [`SizeSpec`] describes how a tray sizes a pager, and
//! [`ClientInfo`] / [`ScreenSize`] are what the window manager reports.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Mouse button that produced a button event.
///
/// Numbering follows the X11 convention: buttons 4 and 5 are the scroll
/// wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
    WheelUp,
    WheelDown,
    Other(u32),
}

impl From<u32> for Button {
    fn from(n: u32) -> Self {
        match n {
            1 => Button::Primary,
            2 => Button::Middle,
            3 => Button::Secondary,
            4 => Button::WheelUp,
            5 => Button::WheelDown,
            n => Button::Other(n),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Primary => write!(f, "button1"),
            Button::Middle => write!(f, "button2"),
            Button::Secondary => write!(f, "button3"),
            Button::WheelUp => write!(f, "button4"),
            Button::WheelDown => write!(f, "button5"),
            Button::Other(n) => write!(f, "button{}", n),
        }
    }
}

/// A desktop switch requested from the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DesktopRequest {
    /// Switch to the desktop at this 0-based index.
    SwitchTo(usize),
    /// Switch to the previous desktop.
    Previous,
    /// Switch to the next desktop.
    Next,
}

impl fmt::Display for DesktopRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesktopRequest::SwitchTo(n) => write!(f, "switch to desktop {}", n),
            DesktopRequest::Previous => write!(f, "previous desktop"),
            DesktopRequest::Next => write!(f, "next desktop"),
        }
    }
}

/// Direction in which desktop cells are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Cells left to right; the tray fixed the height.
    Horizontal,
    /// Cells top to bottom; the tray fixed the width.
    Vertical,
}

/// The one dimension a tray fixes when sizing a pager.
///
/// The other dimension is derived from the screen aspect ratio and the
/// desktop count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeSpec {
    /// Fixed width in pixels; produces a vertical pager.
    FixedWidth(u32),
    /// Fixed height in pixels; produces a horizontal pager.
    FixedHeight(u32),
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::FixedWidth(w) => write!(f, "width {}", w),
            SizeSpec::FixedHeight(h) => write!(f, "height {}", h),
        }
    }
}

/// Parse `"width 64"` / `"height 32"` (case-insensitive, `:` or `=` also
/// accepted as separator).
fn parse_size_spec(s: &str) -> Option<SizeSpec> {
    let normalized = s.trim().to_lowercase().replace([':', '='], " ");
    let mut parts = normalized.split_whitespace();
    let key = parts.next()?;
    let value: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    match key {
        "width" | "w" => Some(SizeSpec::FixedWidth(value)),
        "height" | "h" => Some(SizeSpec::FixedHeight(value)),
        _ => None,
    }
}

/// Wire format: accepts `{"FixedWidth": 64}` or `"width 64"`.
impl<'de> Deserialize<'de> for SizeSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = SizeSpec;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "object {{FixedWidth|FixedHeight: n}} or string \"width n\"")
            }
            fn visit_map<A>(self, mut map: A) -> Result<SizeSpec, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let key = map
                    .next_key::<String>()?
                    .ok_or_else(|| DeError::custom("SizeSpec: empty object"))?;
                let value: u32 = map.next_value()?;
                let spec = match key.as_str() {
                    "FixedWidth" | "width" => SizeSpec::FixedWidth(value),
                    "FixedHeight" | "height" => SizeSpec::FixedHeight(value),
                    other => {
                        return Err(DeError::unknown_variant(
                            other,
                            &["FixedWidth", "FixedHeight"],
                        ))
                    }
                };
                if map.next_key::<String>()?.is_some() {
                    return Err(DeError::custom("SizeSpec: exactly one dimension may be fixed"));
                }
                Ok(spec)
            }
            fn visit_str<E>(self, s: &str) -> Result<SizeSpec, E>
            where
                E: DeError,
            {
                parse_size_spec(s)
                    .ok_or_else(|| DeError::custom(format!("invalid size spec: {:?}", s)))
            }
        }
        deserializer.deserialize_any(V)
    }
}

/// Size of the root window (the whole screen) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// A client window as reported by the window manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Position on the screen in pixels (may be negative when off-screen).
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Desktop the client is assigned to (ignored when sticky).
    #[serde(default)]
    pub desktop: usize,
    /// Whether the client is currently mapped (visible).
    #[serde(default = "default_true")]
    pub mapped: bool,
    /// Whether the client is shown on every desktop.
    #[serde(default)]
    pub sticky: bool,
    /// Whether the client holds the input focus.
    #[serde(default)]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

impl ClientInfo {
    /// A mapped, non-sticky, inactive client on `desktop`.
    pub fn new(x: i32, y: i32, width: u32, height: u32, desktop: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            desktop,
            mapped: true,
            sticky: false,
            active: false,
        }
    }

    /// The desktop whose cell shows this client.
    ///
    /// Sticky clients appear on every desktop, so the pager draws them in
    /// the cell of `current_desktop`.
    pub fn display_desktop(&self, current_desktop: usize) -> usize {
        if self.sticky {
            current_desktop
        } else {
            self.desktop
        }
    }

    /// Whether the client should be filled with the active colour.
    pub fn is_highlighted(&self, current_desktop: usize) -> bool {
        self.active && (self.desktop == current_desktop || self.sticky)
    }
}
