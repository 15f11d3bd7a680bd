//! The real Sense HAT panel, behind the `hardware` feature.
//!
//! The HAT exposes its LED matrix as a Linux framebuffer device
//! (`/dev/fb1` on a stock Raspberry Pi OS install; the process needs
//! access to it, typically via the `video` group). Writes go through the
//! `sensehat-screen` crate as whole 64-pixel frame lines, so this sink
//! keeps a shadow [`FrameBuffer`] and pushes the entire frame on every
//! update. At 8x8 that is 128 bytes per write; nothing worth batching.

use sensehat_screen::{FrameLine, PixelColor, Screen};
use thiserror::Error;
use tracing::info;

use crate::PIXEL_COUNT;
use crate::color::Color;
use crate::surface::{FrameBuffer, PixelSink};

/// Framebuffer device of the Sense HAT LED matrix on Raspberry Pi OS.
pub const DEFAULT_FRAMEBUFFER: &str = "/dev/fb1";

/// Failure to reach the panel.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The framebuffer device could not be opened. Usually the HAT is
    /// missing or the process lacks permission on the device node.
    #[error("failed to open framebuffer {path}: {message}")]
    Open { path: String, message: String },
}

/// The physical LED matrix as a [`PixelSink`].
///
/// Opening the screen blanks the panel, so the shadow frame and the
/// hardware agree from the start.
pub struct SenseHatScreen {
    screen: Screen,
    shadow: FrameBuffer,
}

impl SenseHatScreen {
    /// Open the panel on [`DEFAULT_FRAMEBUFFER`].
    pub fn open() -> Result<Self, ScreenError> {
        Self::open_path(DEFAULT_FRAMEBUFFER)
    }

    /// Open the panel on a specific framebuffer device.
    pub fn open_path(path: &str) -> Result<Self, ScreenError> {
        let screen = Screen::open(path).map_err(|e| ScreenError::Open {
            path: path.to_string(),
            // The vendor error type implements Debug but not Display.
            message: format!("{e:?}"),
        })?;
        info!(path, "opened Sense HAT framebuffer");
        let mut this = Self {
            screen,
            shadow: FrameBuffer::new(),
        };
        this.flush();
        Ok(this)
    }

    /// The in-memory copy of what the panel currently shows.
    pub fn shadow(&self) -> &FrameBuffer {
        &self.shadow
    }

    /// Replace the whole display with `frame` in one write. This is the
    /// path for loaded images and rotated frames.
    pub fn write_frame(&mut self, frame: &FrameBuffer) {
        self.shadow = frame.clone();
        self.flush();
    }

    fn flush(&mut self) {
        let pixels: Vec<PixelColor> = self.shadow.pixels().iter().map(|&c| c.into()).collect();
        let pixels: [PixelColor; PIXEL_COUNT] = pixels.try_into().unwrap();
        self.screen.write_frame(&FrameLine::from_pixels(&pixels));
    }
}

impl PixelSink for SenseHatScreen {
    fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        self.shadow.set_pixel(x, y, color);
        self.flush();
    }

    fn fill(&mut self, color: Color) {
        self.shadow.fill(color);
        self.flush();
    }
}
