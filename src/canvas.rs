//! In-memory offscreen buffer.
//!
//! [`Canvas`] is the buffer every pager owns and paints into.  It
//! implements [`DrawSurface`] with X11 primitive semantics and can be dumped
//! as a binary PPM image or handed to a display host pixel by pixel.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::traits::DrawSurface;
use std::io::{self, Write};

/// A `width × height` grid of RGB pixels, initially black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocate a black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Colour at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Iterate the rows of the canvas, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks() panics on a zero chunk size; an empty canvas has no rows.
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Write the canvas as a binary (P6) PPM image.
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut data = Vec::with_capacity(self.pixels.len() * 3);
        for c in &self.pixels {
            data.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out.write_all(&data)?;
        out.flush()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fill the half-open span `[x0, x1)` of row `y`, clipped.
    fn span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y as u32 >= self.height {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width as i32);
        for x in x0..x1 {
            self.put(x, y, color);
        }
    }
}

impl DrawSurface for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let y0 = rect.y.max(0);
        let y1 = (rect.y + rect.height).min(self.height as i32);
        for y in y0..y1 {
            self.span(y, rect.x, rect.x + rect.width, color);
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) {
        if rect.width < 0 || rect.height < 0 {
            return;
        }
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);
        self.span(top, left, right + 1, color);
        self.span(bottom, left, right + 1, color);
        for y in top..=bottom {
            self.put(left, y, color);
            self.put(right, y, color);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        // Bresenham, end points included.
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
