//! Line drawing and pixel control for the Raspberry Pi Sense HAT's 8x8 LED
//! matrix.
//!
//! The classroom pattern this crate replaces was one class per script: a
//! wrapper around the vendor display that re-validated coordinates and drew
//! lines. Here the same behavior is split into composable pieces:
//! - [`Coordinate`]: heterogeneous input (int, float, text with Swiss
//!   separators) normalized once into grid integers
//! - [`rasterize`]: the slope-aware DDA line rasterizer that silently drops
//!   out-of-bounds cells
//! - [`PixelSink`]: the one-method seam every display surface implements
//! - [`FrameBuffer`]: the in-memory surface; `SenseHatScreen` drives the
//!   real panel behind the `hardware` feature
//! - [`GridDisplay`]: the caller-facing wrapper with pacing, brightness,
//!   clear/fill, and text display
//! - [`letter_frame`]/[`scroll_frames`]: the glyph path behind
//!   `show_letter` and `show_message`
//!
//! ```
//! use sense_grid_rs::{Color, FrameBuffer, GridDisplay};
//!
//! let mut display = GridDisplay::new(FrameBuffer::new());
//! display.draw_line(0, 0, 7, 7, Color::RED)?;
//! display.set_pixel("3,5", 2, Color::gray(128))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color;
pub mod coord;
pub mod draw;
pub mod media;
pub mod raster;
#[cfg(feature = "hardware")]
pub mod screen;
pub mod surface;
pub mod text;

pub use color::{Color, ParseColorError};
pub use coord::{CoordError, Coordinate};
pub use draw::GridDisplay;
pub use media::{MediaError, load_frame};
pub use raster::{Cell, RasterError, rasterize};
#[cfg(feature = "hardware")]
pub use screen::{ScreenError, SenseHatScreen};
pub use surface::{FrameBuffer, PixelSink, Rotation};
pub use text::{letter_frame, scroll_frames};

// ── Grid geometry ──────────────────────────────────────────────────

/// Edge length of the LED matrix. The Sense HAT panel is fixed at 8x8.
pub const GRID_SIZE: u8 = 8;

/// Total number of pixels on the panel.
pub const PIXEL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Whether a normalized coordinate pair lands on the panel.
///
/// Out-of-range coordinates are an expected input everywhere in this crate:
/// they mean "don't plot" rather than an error, and are never clamped
/// to the edge.
pub fn in_bounds(x: i32, y: i32) -> bool {
    (0..GRID_SIZE as i32).contains(&x) && (0..GRID_SIZE as i32).contains(&y)
}

/// Row-major framebuffer index of an in-bounds pixel. Off-panel
/// coordinates are a caller bug here, not a "don't plot" signal, so
/// they are debug-asserted instead of dropped.
pub(crate) fn pixel_index(x: u8, y: u8) -> usize {
    debug_assert!(in_bounds(x as i32, y as i32), "pixel ({x}, {y}) is off the panel");
    y as usize * GRID_SIZE as usize + x as usize
}

// ── Tests ──────────────────────────────────────────────────────────
