//! The caller-facing drawing layer.
//!
//! [`GridDisplay`] wraps any [`PixelSink`] and is where raw input meets
//! the panel: coordinates are normalized, off-panel writes are dropped,
//! lines go through the rasterizer, and brightness is applied on the way
//! out. The classroom scripts did all of this inside one subclass of the
//! vendor display; here it composes over whatever sink you hand in.
//!
//! # Rust concept: generics with trait bounds
//! `GridDisplay<S: PixelSink>` is monomorphized per sink type. Tests run
//! it over [`FrameBuffer`](crate::surface::FrameBuffer), the demos over
//! the hardware screen, with no dynamic dispatch in between.

use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::color::Color;
use crate::coord::{CoordError, Coordinate};
use crate::raster::{RasterError, rasterize};
use crate::surface::{FrameBuffer, PixelSink};
use crate::text::{letter_frame, scroll_frames};
use crate::{GRID_SIZE, in_bounds};

/// A drawing handle over a pixel sink.
///
/// Holds the display brightness (percent, 100 = full) and applies it to
/// every write, the way the panel's low-light mode dims everything
/// without callers changing their colors.
pub struct GridDisplay<S: PixelSink> {
    sink: S,
    brightness: u8,
}

impl<S: PixelSink> GridDisplay<S> {
    /// Wrap a sink at full brightness.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            brightness: 100,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Current display brightness in percent.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Set the brightness applied to subsequent writes. Values above 100
    /// clamp to 100. Already-written pixels keep their old scaling.
    pub fn set_brightness(&mut self, percent: u8) {
        self.brightness = percent.min(100);
        debug!(brightness = self.brightness, "display brightness changed");
    }

    /// Normalize `x` and `y` and write one pixel.
    ///
    /// Returns `Ok(true)` when the pixel was written and `Ok(false)` when
    /// it normalized fine but lies off the panel (dropped, logged at
    /// debug). Only input that cannot become a number is an error.
    ///
    /// ```
    /// use sense_grid_rs::{Color, FrameBuffer, GridDisplay};
    ///
    /// let mut display = GridDisplay::new(FrameBuffer::new());
    /// assert_eq!(display.set_pixel("2,2", 0.9, Color::RED)?, true);
    /// assert_eq!(display.set_pixel(12, 0, Color::RED)?, false);
    /// # Ok::<(), sense_grid_rs::CoordError>(())
    /// ```
    pub fn set_pixel(
        &mut self,
        x: impl Into<Coordinate>,
        y: impl Into<Coordinate>,
        color: Color,
    ) -> Result<bool, CoordError> {
        let x = x.into().normalize()?;
        let y = y.into().normalize()?;
        if !in_bounds(x, y) {
            debug!(x, y, "pixel off the panel, dropped");
            return Ok(false);
        }
        self.write(x as u8, y as u8, color);
        Ok(true)
    }

    /// Draw a line between two raw endpoints. Returns how many cells were
    /// written; endpoints that trace past the panel edge just write fewer.
    pub fn draw_line(
        &mut self,
        x1: impl Into<Coordinate>,
        y1: impl Into<Coordinate>,
        x2: impl Into<Coordinate>,
        y2: impl Into<Coordinate>,
        color: Color,
    ) -> Result<usize, RasterError> {
        self.draw_line_paced(x1, y1, x2, y2, color, Duration::ZERO)
    }

    /// [`draw_line`](Self::draw_line) with a sleep after each cell, for
    /// the classroom "watch the line appear" effect. The cell sequence is
    /// identical to the unpaced call; only the timing differs.
    pub fn draw_line_paced(
        &mut self,
        x1: impl Into<Coordinate>,
        y1: impl Into<Coordinate>,
        x2: impl Into<Coordinate>,
        y2: impl Into<Coordinate>,
        color: Color,
        delay: Duration,
    ) -> Result<usize, RasterError> {
        let cells = rasterize(x1, y1, x2, y2, color)?;
        let count = cells.len();
        for cell in cells {
            self.write(cell.x, cell.y, cell.color);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        Ok(count)
    }

    /// Show one character on the whole panel. Characters the font does
    /// not cover render as `?`, the same substitute the classroom boards
    /// showed for them.
    pub fn show_letter(&mut self, c: char, color: Color, background: Color) {
        let frame = letter_frame(c, color, background)
            .or_else(|| letter_frame('?', color, background))
            .unwrap_or_default();
        self.show_frame(&frame);
    }

    /// Scroll `text` across the panel right to left, one pixel column
    /// per step, sleeping `delay` between steps. The panel is left all
    /// `background` when the message has run off.
    pub fn show_message(&mut self, text: &str, color: Color, background: Color, delay: Duration) {
        for frame in scroll_frames(text, color, background) {
            self.show_frame(&frame);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
    }

    /// Copy a prepared frame to the sink at the current brightness.
    pub fn show_frame(&mut self, frame: &FrameBuffer) {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.write(x, y, frame.get_pixel(x, y));
            }
        }
    }

    /// Turn the whole panel off.
    pub fn clear(&mut self) {
        self.sink.fill(Color::BLACK);
    }

    /// Set the whole panel to one color, at the current brightness.
    pub fn fill(&mut self, color: Color) {
        self.sink.fill(color.apply_brightness(self.brightness));
    }

    fn write(&mut self, x: u8, y: u8, color: Color) {
        self.sink
            .set_pixel(x, y, color.apply_brightness(self.brightness));
    }
}

// ── Tests ──────────────────────────────────────────────────────────
