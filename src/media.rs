//! Loading an 8x8 frame from an image file.
//!
//! Any image the `image` crate can decode becomes a panel frame: decode,
//! resample down to 8x8 (distorting if the source is not square), and
//! copy the RGB values across. Useful for icons and sprites drawn in a
//! normal editor instead of typed out as 64 color triples.

use std::path::Path;

use image::ImageReader;
use image::imageops::FilterType;
use thiserror::Error;
use tracing::debug;

use crate::GRID_SIZE;
use crate::color::Color;
use crate::surface::FrameBuffer;

/// Why an image file could not become a frame.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

/// Load an image file and resample it to a full-panel frame.
///
/// The result is always exactly 8x8 regardless of the source dimensions.
/// Lanczos3 keeps downscaled edges reasonably crisp at this tiny size.
///
/// ```no_run
/// use sense_grid_rs::{GridDisplay, load_frame};
///
/// let display = GridDisplay::new(load_frame("sprite.png")?);
/// # let _ = display;
/// # Ok::<(), sense_grid_rs::MediaError>(())
/// ```
pub fn load_frame(path: impl AsRef<Path>) -> Result<FrameBuffer, MediaError> {
    let path = path.as_ref();
    let decoded = ImageReader::open(path)?.decode()?;
    let small = decoded
        .resize_exact(GRID_SIZE as u32, GRID_SIZE as u32, FilterType::Lanczos3)
        .to_rgb8();

    let mut frame = FrameBuffer::new();
    for (x, y, pixel) in small.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        frame.set_pixel(x as u8, y as u8, Color::new(r, g, b));
    }
    debug!(path = %path.display(), "loaded panel frame");
    Ok(frame)
}

// ── Tests ──────────────────────────────────────────────────────────
