//! Display surfaces: the sink trait every surface implements and the
//! in-memory frame buffer used for tests, demos, and the hardware shadow.
//!
//! The classroom code reached the panel by subclassing the vendor display
//! class. Here the display is a trait instead, so the drawing layer works
//! the same against real hardware, the in-memory buffer, or anything a
//! caller brings along.

use crate::color::Color;
use crate::{GRID_SIZE, PIXEL_COUNT, pixel_index};

// ── The sink trait ─────────────────────────────────────────────────

/// A surface that accepts pixel writes.
///
/// Coordinates handed to a sink are already validated to lie in
/// `[0, GRID_SIZE)`; bounds enforcement happens upstream in the drawing
/// layer. What a write means (memory slot, framebuffer ioctl) is the
/// implementation's business, as is its failure behavior.
///
/// # Rust concept: default trait methods
/// `fill` has a body right in the trait, written in terms of `set_pixel`.
/// Implementations get it for free and can override it when they have a
/// faster whole-frame path (the hardware sink does).
pub trait PixelSink {
    /// Write one pixel. `x` and `y` are in bounds.
    fn set_pixel(&mut self, x: u8, y: u8, color: Color);

    /// Write every pixel on the surface.
    fn fill(&mut self, color: Color) {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.set_pixel(x, y, color);
            }
        }
    }
}

// ── Rotation ───────────────────────────────────────────────────────

/// Display orientation in clockwise quarter turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The orientations the panel supports, by degree value.
    /// Anything other than 0, 90, 180 or 270 is rejected.
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Deg0),
            90 => Some(Rotation::Deg90),
            180 => Some(Rotation::Deg180),
            270 => Some(Rotation::Deg270),
            _ => None,
        }
    }

    /// Where an in-bounds pixel lands after rotating the frame clockwise.
    pub fn map(self, x: u8, y: u8) -> (u8, u8) {
        let last = GRID_SIZE - 1;
        match self {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (last - y, x),
            Rotation::Deg180 => (last - x, last - y),
            Rotation::Deg270 => (y, last - x),
        }
    }
}

// ── In-memory frame buffer ─────────────────────────────────────────

/// A full 8x8 frame held in memory, row-major like the Sense HAT
/// framebuffer device.
///
/// This is the test double for the real panel and the shadow copy the
/// hardware sink keeps, so it carries the whole-frame operations too:
/// brightness scaling and quarter-turn rotation return new frames rather
/// than mutating in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: [Color; PIXEL_COUNT],
}

impl FrameBuffer {
    /// A frame with every pixel off.
    pub const fn new() -> Self {
        Self {
            pixels: [Color::BLACK; PIXEL_COUNT],
        }
    }

    /// Write one pixel. `x` and `y` must be on the panel (debug-asserted);
    /// raw caller input belongs behind the drawing layer's bounds check.
    pub fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        self.pixels[pixel_index(x, y)] = color;
    }

    /// Read one pixel. Same bounds contract as [`set_pixel`](Self::set_pixel).
    pub fn get_pixel(&self, x: u8, y: u8) -> Color {
        self.pixels[pixel_index(x, y)]
    }

    /// All 64 pixels in row-major order, as a slice so it serializes to
    /// the same list of `{"r", "g", "b"}` objects the classroom status
    /// endpoint returned.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels = [color; PIXEL_COUNT];
    }

    /// A copy of this frame with every pixel scaled to `percent`
    /// brightness. 100 is the identity, 0 is a dark panel.
    pub fn with_brightness(&self, percent: u8) -> Self {
        let mut out = self.clone();
        for pixel in &mut out.pixels {
            *pixel = pixel.apply_brightness(percent);
        }
        out
    }

    /// A copy of this frame rotated clockwise.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut out = Self::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let (nx, ny) = rotation.map(x, y);
                out.set_pixel(nx, ny, self.get_pixel(x, y));
            }
        }
        out
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        FrameBuffer::set_pixel(self, x, y, color);
    }

    fn fill(&mut self, color: Color) {
        FrameBuffer::fill(self, color);
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn new_frame_is_all_black() {
        let frame = FrameBuffer::new();
        assert!(frame.pixels().iter().all(|&p| p == Color::BLACK));
        assert_eq!(frame, FrameBuffer::default());
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(3, 5, Color::RED);
        assert_eq!(frame.get_pixel(3, 5), Color::RED);
        assert_eq!(frame.get_pixel(5, 3), Color::BLACK);
    }

    // Off-panel x would otherwise alias into the next row's storage.
    #[test]
    #[should_panic(expected = "off the panel")]
    fn set_pixel_panics_off_the_panel() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(10, 0, Color::RED);
    }

    #[test]
    #[should_panic(expected = "off the panel")]
    fn get_pixel_panics_off_the_panel() {
        let frame = FrameBuffer::new();
        frame.get_pixel(0, 9);
    }

    #[test]
    fn storage_is_row_major() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(2, 1, Color::GREEN);
        assert_eq!(frame.pixels()[10], Color::GREEN);
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut frame = FrameBuffer::new();
        frame.fill(Color::CYAN);
        assert!(frame.pixels().iter().all(|&p| p == Color::CYAN));
    }

    #[test]
    fn brightness_scales_the_whole_frame() {
        let mut frame = FrameBuffer::new();
        frame.fill(Color::WHITE);
        let dimmed = frame.with_brightness(50);
        assert!(dimmed.pixels().iter().all(|&p| p == Color::gray(127)));
        assert_eq!(frame.with_brightness(100), frame);
        assert_eq!(frame.with_brightness(0), FrameBuffer::new());
    }

    #[rstest]
    #[case(0, Some(Rotation::Deg0))]
    #[case(90, Some(Rotation::Deg90))]
    #[case(180, Some(Rotation::Deg180))]
    #[case(270, Some(Rotation::Deg270))]
    #[case(45, None)]
    #[case(360, None)]
    fn rotation_from_degrees(#[case] degrees: u16, #[case] expected: Option<Rotation>) {
        assert_eq!(Rotation::from_degrees(degrees), expected);
    }

    #[test]
    fn quarter_turn_maps_corners_clockwise() {
        assert_eq!(Rotation::Deg90.map(0, 0), (7, 0));
        assert_eq!(Rotation::Deg90.map(7, 0), (7, 7));
        assert_eq!(Rotation::Deg180.map(0, 0), (7, 7));
        assert_eq!(Rotation::Deg270.map(0, 0), (0, 7));
        assert_eq!(Rotation::Deg0.map(4, 2), (4, 2));
    }

    #[test]
    fn rotating_moves_pixels_with_the_frame() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, Color::RED);
        frame.set_pixel(7, 0, Color::GREEN);
        let turned = frame.rotated(Rotation::Deg90);
        assert_eq!(turned.get_pixel(7, 0), Color::RED);
        assert_eq!(turned.get_pixel(7, 7), Color::GREEN);
        assert_eq!(turned.get_pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn four_quarter_turns_are_the_identity() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(1, 2, Color::BLUE);
        frame.set_pixel(3, 4, Color::YELLOW);
        frame.set_pixel(6, 0, Color::MAGENTA);
        let back = frame
            .rotated(Rotation::Deg90)
            .rotated(Rotation::Deg90)
            .rotated(Rotation::Deg90)
            .rotated(Rotation::Deg90);
        assert_eq!(back, frame);
    }

    #[test]
    fn pixels_serialize_to_the_status_list_shape() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, Color::RED);
        let value = serde_json::to_value(frame.pixels()).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), PIXEL_COUNT);
        assert_eq!(list[0], serde_json::json!({"r": 255, "g": 0, "b": 0}));
        assert_eq!(list[63], serde_json::json!({"r": 0, "g": 0, "b": 0}));
    }

    // A sink that only records writes, to exercise the trait's default
    // `fill` body.
    struct Recorder {
        writes: Vec<(u8, u8)>,
    }

    impl PixelSink for Recorder {
        fn set_pixel(&mut self, x: u8, y: u8, _color: Color) {
            self.writes.push((x, y));
        }
    }

    #[test]
    fn default_fill_visits_every_cell_once() {
        let mut recorder = Recorder { writes: Vec::new() };
        recorder.fill(Color::WHITE);
        assert_eq!(recorder.writes.len(), PIXEL_COUNT);
        let mut seen = recorder.writes.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PIXEL_COUNT);
    }
}
