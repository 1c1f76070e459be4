//! Pager layout engine.
//!
//! The tray fixes one dimension of a pager (see [`SizeSpec`]); the
//! [`PagerLayout`] derives everything else from it: the size of one desktop
//! cell, the size of the whole component, and the scale factors that
//! project real screen coordinates into a cell.
//!
//! Cells are separated by a 1-pixel divider, so cell `n` starts at
//! `n * (cell + 1)` along the major axis.  Inside a cell, one pixel on each
//! side is reserved for the outline around client rectangles, which is why
//! the scale factors use `cell - 2`.

use crate::command::{ClientInfo, Orientation, ScreenSize, SizeSpec};
use crate::geometry::{Point, Rect};
use log::trace;

/// Errors from deriving a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The tray fixed a dimension of zero pixels.
    #[error("fixed {0} must be positive")]
    ZeroDimension(SizeSpec),
    /// The window manager reported a screen with a zero side.
    #[error("screen size {width}x{height} is degenerate")]
    EmptyScreen { width: u32, height: u32 },
    /// The window manager reported no desktops.
    #[error("window manager reports no desktops")]
    NoDesktops,
    /// The derived cell is zero pixels along one axis.
    #[error("{spec} on a {screen_width}x{screen_height} screen gives an empty desktop cell")]
    EmptyCell {
        spec: SizeSpec,
        screen_width: u32,
        screen_height: u32,
    },
    /// The component would not fit in signed pixel coordinates.
    #[error("{spec} with {desktops} desktops overflows the component size")]
    TooLarge { spec: SizeSpec, desktops: usize },
}

/// Geometry of a sized pager.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagerLayout {
    orientation: Orientation,
    desk_width: u32,
    desk_height: u32,
    width: u32,
    height: u32,
    scale_x: f64,
    scale_y: f64,
    desktop_count: usize,
}

impl PagerLayout {
    /// Derive a layout from the fixed dimension, the screen size, and the
    /// number of desktops.
    ///
    /// * `FixedWidth(w)` stacks desktops vertically.  Each cell is `w` wide
    ///   and `w * screen.height / screen.width` tall (integer division), and
    ///   the component is `(cell_height + 1) * desktops` tall.
    /// * `FixedHeight(h)` is the horizontal mirror image.
    pub fn compute(
        spec: SizeSpec,
        screen: ScreenSize,
        desktops: usize,
    ) -> Result<Self, LayoutError> {
        if screen.width == 0 || screen.height == 0 {
            return Err(LayoutError::EmptyScreen {
                width: screen.width,
                height: screen.height,
            });
        }
        if desktops == 0 {
            return Err(LayoutError::NoDesktops);
        }

        let empty_cell = || LayoutError::EmptyCell {
            spec,
            screen_width: screen.width,
            screen_height: screen.height,
        };
        let too_large = || LayoutError::TooLarge { spec, desktops };

        // Total extent along the stacking axis: one cell plus divider per desktop.
        let stacked = |cell: u32| -> Result<u32, LayoutError> {
            let desktops = u32::try_from(desktops).map_err(|_| too_large())?;
            cell.checked_add(1)
                .and_then(|c| c.checked_mul(desktops))
                .ok_or_else(too_large)
        };

        let (orientation, desk_width, desk_height, width, height) = match spec {
            SizeSpec::FixedWidth(0) | SizeSpec::FixedHeight(0) => {
                return Err(LayoutError::ZeroDimension(spec));
            }
            SizeSpec::FixedWidth(w) => {
                let desk_height = derive(w, screen.height, screen.width).ok_or_else(empty_cell)?;
                let height = stacked(desk_height)?;
                (Orientation::Vertical, w, desk_height, w, height)
            }
            SizeSpec::FixedHeight(h) => {
                let desk_width = derive(h, screen.width, screen.height).ok_or_else(empty_cell)?;
                let width = stacked(desk_width)?;
                (Orientation::Horizontal, desk_width, h, width, h)
            }
        };
        // Cells lie inside the component, so this bounds every `as i32` below.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_large());
        }

        let layout = Self {
            orientation,
            desk_width,
            desk_height,
            width,
            height,
            scale_x: scale(desk_width, screen.width),
            scale_y: scale(desk_height, screen.height),
            desktop_count: desktops,
        };
        trace!("layout {} -> {:?}", spec, layout);
        Ok(layout)
    }

    //  Accessors

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Size of one desktop cell as `(width, height)`.
    pub fn desk_size(&self) -> (u32, u32) {
        (self.desk_width, self.desk_height)
    }

    /// Size of the whole component as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Screen-to-cell scale factors as `(scale_x, scale_y)`.
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    pub fn desktop_count(&self) -> usize {
        self.desktop_count
    }

    //  Cell geometry

    /// Distance between the starts of two neighbouring cells along the
    /// major axis (the cell plus its divider).
    fn stride(&self) -> i32 {
        let cell = match self.orientation {
            Orientation::Horizontal => self.desk_width,
            Orientation::Vertical => self.desk_height,
        };
        cell as i32 + 1
    }

    /// Offset of `desktop`'s cell along the major axis.
    pub fn cell_offset(&self, desktop: usize) -> i32 {
        i32::try_from(desktop).map_or(i32::MAX, |d| d.saturating_mul(self.stride()))
    }

    /// The area of `desktop`'s cell, spanning the full minor axis.
    pub fn cell_rect(&self, desktop: usize) -> Rect {
        let offset = self.cell_offset(desktop);
        match self.orientation {
            Orientation::Horizontal => {
                Rect::new(offset, 0, self.desk_width as i32, self.height as i32)
            }
            Orientation::Vertical => {
                Rect::new(0, offset, self.width as i32, self.desk_height as i32)
            }
        }
    }

    /// The divider lines between neighbouring cells, as `(from, to)` pairs.
    ///
    /// Divider `i` (for `i` in `1..desktop_count`) sits on the last pixel
    /// before cell `i`.  The far end point lies one pixel past the
    /// component edge, matching how the lines are drawn on an X server.
    pub fn dividers(&self) -> Vec<(Point, Point)> {
        (1..self.desktop_count)
            .map(|i| {
                let at = self.cell_offset(i) - 1;
                match self.orientation {
                    Orientation::Horizontal => {
                        (Point::new(at, 0), Point::new(at, self.height as i32))
                    }
                    Orientation::Vertical => {
                        (Point::new(0, at), Point::new(self.width as i32, at))
                    }
                }
            })
            .collect()
    }

    /// Desktop under the pager-relative position `(x, y)`.
    ///
    /// Only the major axis matters.  Returns `None` for negative positions
    /// and positions past the last cell.
    pub fn desktop_at(&self, x: i32, y: i32) -> Option<usize> {
        let along = match self.orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        };
        if along < 0 {
            return None;
        }
        let desktop = (along / self.stride()) as usize;
        (desktop < self.desktop_count).then_some(desktop)
    }

    //  Client projection

    /// Project `client` into the pager.
    ///
    /// The client's screen geometry is scaled into a cell (shifted one pixel
    /// right and down for the cell border), clipped to the cell, and moved
    /// into the cell of the desktop it shows on.  Returns `None` when the
    /// clipped rectangle is empty or the client shows on a desktop past the
    /// last cell.
    ///
    /// Mapped state is not checked here; see
    /// [`draw_client`](crate::pager::draw_client).
    pub fn project(&self, client: &ClientInfo, current_desktop: usize) -> Option<Rect> {
        let desktop = client.display_desktop(current_desktop);
        if desktop >= self.desktop_count {
            return None;
        }

        // Clip in i64: scaled geometry near the i32 limits must not wrap.
        let desk_width = i64::from(self.desk_width);
        let desk_height = i64::from(self.desk_height);

        let mut x = (f64::from(client.x) * self.scale_x + 1.0) as i64;
        let mut y = (f64::from(client.y) * self.scale_y + 1.0) as i64;
        let mut width = (f64::from(client.width) * self.scale_x) as i64;
        let mut height = (f64::from(client.height) * self.scale_y) as i64;

        if x.saturating_add(width) > desk_width {
            width = desk_width.saturating_sub(x);
        }
        if y.saturating_add(height) > desk_height {
            height = desk_height.saturating_sub(y);
        }
        if x < 0 {
            width = width.saturating_add(x);
            x = 0;
        }
        if y < 0 {
            height = height.saturating_add(y);
            y = 0;
        }
        if width <= 0 || height <= 0 {
            return None;
        }

        // Now 0 <= x, x + width <= desk_width, and likewise on y.
        let offset = self.cell_offset(desktop);
        let rect = Rect::new(x as i32, y as i32, width as i32, height as i32);
        Some(match self.orientation {
            Orientation::Horizontal => rect.translate(offset, 0),
            Orientation::Vertical => rect.translate(0, offset),
        })
    }
}

/// `fixed * num / den` with integer truncation; `None` when it rounds to 0.
fn derive(fixed: u32, num: u32, den: u32) -> Option<u32> {
    let value = u64::from(fixed) * u64::from(num) / u64::from(den);
    u32::try_from(value).ok().filter(|v| *v > 0)
}

/// Ratio of the usable cell extent to the screen extent.
///
/// Cells narrower than the 2-pixel border get a scale of zero rather than
/// a negative one.
fn scale(cell: u32, screen: u32) -> f64 {
    ((f64::from(cell) - 2.0) / f64::from(screen)).max(0.0)
}

//  Tests
