//! Letters and scrolling messages on the 8×8 panel.
//!
//! The classroom boards spent as much time on `show_letter` and
//! `show_message` as on line drawing: one character fills the whole
//! panel, a longer message slides across it right to left. Glyphs come
//! from the `font8x8` bitmap set, the same data the Sense HAT ecosystem
//! renders from, so there is no font file to load at runtime.
//!
//! This module is pure frame generation. Putting the frames on a display,
//! paced and at the current brightness, is [`crate::draw`]'s job.

use font8x8::{BASIC_FONTS, UnicodeFonts};

use crate::GRID_SIZE;
use crate::color::Color;
use crate::surface::FrameBuffer;

/// Drawn in place of characters the font has no glyph for.
const FALLBACK: char = '?';

// ── Single letters ─────────────────────────────────────────────────

/// Render one character into a full-panel frame.
///
/// Lit glyph pixels get `color`, everything else `background`. Returns
/// `None` when the font does not cover `c`; the basic set covers ASCII,
/// so accented input needs the caller's own fallback (or
/// [`GridDisplay::show_letter`](crate::draw::GridDisplay::show_letter),
/// which substitutes `?`).
pub fn letter_frame(c: char, color: Color, background: Color) -> Option<FrameBuffer> {
    BASIC_FONTS.get(c).map(|glyph| glyph_frame(&glyph, color, background))
}

// ── Scrolling messages ─────────────────────────────────────────────

/// Every frame of a right-to-left scroll of `text`, in order.
///
/// The message enters from the right edge, moves one pixel column per
/// frame, and runs fully off the left, so the first and last frames are
/// all background. Characters without a glyph render as `?`.
///
/// # Rust concept: `windows`
/// The whole animation is one pass over a flat column list:
/// `windows(8)` yields every overlapping 8-column view, and each view
/// is exactly one frame of the scroll.
pub fn scroll_frames(text: &str, color: Color, background: Color) -> Vec<FrameBuffer> {
    let width = GRID_SIZE as usize;

    // One u8 per column, bit y set when row y is lit. Blank lead-in,
    // the glyph columns, blank run-out.
    let mut columns: Vec<u8> = vec![0; width];
    for c in text.chars() {
        let glyph = BASIC_FONTS
            .get(c)
            .or_else(|| BASIC_FONTS.get(FALLBACK))
            .unwrap_or_default();
        for x in 0..GRID_SIZE {
            columns.push(column_bits(&glyph, x));
        }
    }
    columns.resize(columns.len() + width, 0);

    columns
        .windows(width)
        .map(|window| window_frame(window, color, background))
        .collect()
}

// ── Glyph plumbing ─────────────────────────────────────────────────

/// The rows of glyph column `x`, packed into one byte. `font8x8` stores
/// a glyph as eight row bytes with the least significant bit leftmost.
fn column_bits(glyph: &[u8; 8], x: u8) -> u8 {
    let mut bits = 0u8;
    for (y, row) in glyph.iter().enumerate() {
        if row & (1 << x) != 0 {
            bits |= 1 << y;
        }
    }
    bits
}

fn glyph_frame(glyph: &[u8; 8], color: Color, background: Color) -> FrameBuffer {
    let mut frame = FrameBuffer::new();
    for (y, row) in glyph.iter().enumerate() {
        for x in 0..GRID_SIZE {
            let lit = row & (1 << x) != 0;
            frame.set_pixel(x, y as u8, if lit { color } else { background });
        }
    }
    frame
}

fn window_frame(window: &[u8], color: Color, background: Color) -> FrameBuffer {
    let mut frame = FrameBuffer::new();
    for (x, bits) in window.iter().enumerate() {
        for y in 0..GRID_SIZE {
            let lit = bits & (1 << y) != 0;
            frame.set_pixel(x as u8, y, if lit { color } else { background });
        }
    }
    frame
}

// ── Tests ──────────────────────────────────────────────────────────
