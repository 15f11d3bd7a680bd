//! Line rasterization over the 8×8 grid.
//!
//! A small DDA (digital differential analyzer). Both endpoints are
//! normalized first, then the slope magnitude picks the iteration axis so
//! the traced line never has gaps. Cells that fall off the panel are
//! dropped, never clamped, so a line to a far-away endpoint lights
//! exactly the pixels the true line passes through.
//!
//! This module is pure computation. It does no I/O and holds no state;
//! applying the cells to a display is [`crate::draw`]'s job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::coord::{CoordError, Coordinate};
use crate::{GRID_SIZE, in_bounds};

// ── Cells ──────────────────────────────────────────────────────────

/// One lit pixel produced by the rasterizer.
///
/// `x` and `y` are already validated to lie on the grid, hence `u8`
/// rather than the `i32` the normalizer works in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
    pub color: Color,
}

impl Cell {
    pub const fn new(x: u8, y: u8, color: Color) -> Self {
        Self { x, y, color }
    }
}

/// Why a whole line was rejected.
///
/// Out-of-bounds endpoints are *not* an error; they just shorten the
/// emitted sequence, possibly to nothing. Only input that cannot be
/// turned into numbers at all lands here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// An endpoint failed normalization. No cells are produced.
    #[error("invalid line endpoint: {0}")]
    InvalidEndpoint(#[from] CoordError),
}

// ── Rasterizer ─────────────────────────────────────────────────────

/// Trace the line from `(x1, y1)` to `(x2, y2)` and collect the
/// in-bounds cells it covers, in ascending order of the iterated axis.
///
/// Endpoints accept anything convertible to [`Coordinate`], so integers,
/// floats and text such as `"3,5"` all work. Both endpoints must
/// normalize or the call fails with [`RasterError::InvalidEndpoint`]
/// before any cell is produced.
///
/// Axis choice: vertical lines iterate `y` directly; otherwise the slope
/// `a` decides. `|a| <= 1` steps `x` (at most one cell per column),
/// `|a| > 1` steps `y` (at most one cell per row). Either way the
/// iterated range is intersected with the grid span first, so a call
/// never takes more than [`GRID_SIZE`] steps per axis no matter how far
/// out the endpoints lie.
///
/// ```
/// use sense_grid_rs::{Color, rasterize};
///
/// let cells = rasterize(0, 0, 7, 7, Color::WHITE)?;
/// assert_eq!(cells.len(), 8);
/// assert!(cells.iter().all(|c| c.x == c.y));
/// # Ok::<(), sense_grid_rs::RasterError>(())
/// ```
pub fn rasterize(
    x1: impl Into<Coordinate>,
    y1: impl Into<Coordinate>,
    x2: impl Into<Coordinate>,
    y2: impl Into<Coordinate>,
    color: Color,
) -> Result<Vec<Cell>, RasterError> {
    let x1 = x1.into().normalize()?;
    let y1 = y1.into().normalize()?;
    let x2 = x2.into().normalize()?;
    let y2 = y2.into().normalize()?;

    let mut cells = Vec::new();

    // Vertical line: undefined slope, iterate y directly.
    if x1 == x2 {
        for y in grid_span(y1, y2) {
            push_if_in_bounds(&mut cells, x1, y, color);
        }
        return Ok(cells);
    }

    // y = a*x + c over the normalized endpoints. Computed in f64 so the
    // subtraction cannot overflow for extreme i32 endpoints.
    let a = (y2 as f64 - y1 as f64) / (x2 as f64 - x1 as f64);
    let c = y1 as f64 - a * x1 as f64;

    if a.abs() <= 1.0 {
        for x in grid_span(x1, x2) {
            let y = (a * x as f64 + c).round_ties_even() as i32;
            push_if_in_bounds(&mut cells, x, y, color);
        }
    } else {
        for y in grid_span(y1, y2) {
            let x = ((y as f64 - c) / a).round_ties_even() as i32;
            push_if_in_bounds(&mut cells, x, y, color);
        }
    }

    Ok(cells)
}

/// The ascending range between `a` and `b`, intersected with the grid.
/// Empty when both endpoints lie on the same side outside the panel.
fn grid_span(a: i32, b: i32) -> std::ops::RangeInclusive<i32> {
    let lo = a.min(b).max(0);
    let hi = a.max(b).min(GRID_SIZE as i32 - 1);
    lo..=hi
}

fn push_if_in_bounds(cells: &mut Vec<Cell>, x: i32, y: i32, color: Color) {
    if in_bounds(x, y) {
        cells.push(Cell::new(x as u8, y as u8, color));
    }
}

// ── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const C: Color = Color::WHITE;

    #[test]
    fn main_diagonal_covers_all_eight_cells() {
        let cells = rasterize(0, 0, 7, 7, C).unwrap();
        assert_eq!(cells.len(), 8);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!((cell.x, cell.y), (i as u8, i as u8));
        }
    }

    #[test]
    fn vertical_line_iterates_y() {
        let cells = rasterize(0, 0, 0, 7, C).unwrap();
        assert_eq!(cells.len(), 8);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!((cell.x, cell.y), (0, i as u8));
        }
    }

    #[test]
    fn horizontal_line_iterates_x() {
        let cells = rasterize(0, 4, 7, 4, C).unwrap();
        assert_eq!(cells.len(), 8);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!((cell.x, cell.y), (i as u8, 4));
        }
    }

    #[test]
    fn shallow_line_emits_one_cell_per_column() {
        let cells = rasterize(0, 0, 7, 1, C).unwrap();
        assert_eq!(cells.len(), 8);
        let xs: Vec<u8> = cells.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn steep_line_emits_one_cell_per_row() {
        let cells = rasterize(0, 0, 1, 7, C).unwrap();
        assert_eq!(cells.len(), 8);
        let ys: Vec<u8> = cells.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn tie_steps_round_half_to_even_along_the_trace() {
        // Slope 1/2 hits exact .5 at every odd column.
        let cells = rasterize(0, 0, 6, 3, C).unwrap();
        let ys: Vec<u8> = cells.iter().map(|c| c.y).collect();
        assert_eq!(ys, vec![0, 0, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn out_of_range_endpoints_are_dropped_not_clamped() {
        // Only the segment crossing the panel survives; no pixel is
        // snapped to an edge the true line never touches.
        let cells = rasterize(-5, -5, 12, 12, C).unwrap();
        assert_eq!(cells.len(), 8);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!((cell.x, cell.y), (i as u8, i as u8));
        }
    }

    #[rstest]
    #[case(10, 0, 14, 0)] // right of the panel
    #[case(0, 10, 7, 10)] // below it, crossing the full x span
    #[case(-3, -9, -1, -2)] // above-left, steep
    fn line_entirely_outside_emits_nothing(
        #[case] x1: i32,
        #[case] y1: i32,
        #[case] x2: i32,
        #[case] y2: i32,
    ) {
        assert_eq!(rasterize(x1, y1, x2, y2, C).unwrap(), vec![]);
    }

    #[test]
    fn single_point_emits_one_cell() {
        assert_eq!(rasterize(3, 3, 3, 3, C).unwrap(), vec![Cell::new(3, 3, C)]);
    }

    #[test]
    fn single_point_outside_emits_nothing() {
        assert_eq!(rasterize(9, 3, 9, 3, C).unwrap(), vec![]);
    }

    #[test]
    fn reversed_endpoints_trace_the_same_cells() {
        let forward = rasterize(0, 0, 7, 3, C).unwrap();
        let backward = rasterize(7, 3, 0, 0, C).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn endpoints_normalize_before_tracing() {
        // "3,5" is 3.5 which rounds to 4; 2.5 rounds to 2.
        let cells = rasterize("3,5", 2.5, 7, 7, C).unwrap();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(4, 2, C));
        assert_eq!(cells[5], Cell::new(7, 7, C));
    }

    #[test]
    fn unparseable_endpoint_fails_the_whole_line() {
        let err = rasterize("abc", 0, 7, 7, C).unwrap_err();
        assert_eq!(
            err,
            RasterError::InvalidEndpoint(CoordError::Unparseable("abc".to_string()))
        );
    }

    #[test]
    fn cells_carry_the_requested_color() {
        let cells = rasterize(0, 0, 3, 0, Color::RED).unwrap();
        assert!(cells.iter().all(|c| c.color == Color::RED));
    }

    #[test]
    fn grid_span_clips_to_the_panel() {
        assert_eq!(grid_span(-5, 12), 0..=7);
        assert_eq!(grid_span(3, 5), 3..=5);
        assert!(grid_span(10, 14).is_empty());
    }
}
