//! # Frame Dump Example
//!
//! Draws on the in-memory frame buffer and prints the result, so you can
//! try the whole drawing API with no Sense HAT attached:
//! - Lines through the rasterizer, including messy text coordinates
//! - An off-panel write being dropped (visible in the debug log)
//! - An ASCII rendering of the frame
//! - The JSON pixel list a status endpoint would serve
//!
//! ## Run it
//! ```sh
//! cargo run --example frame_dump
//! ```
//!
//! ## Rust concepts introduced
//! - `Result` in `main` and the `?` operator
//! - Iterating ranges vs iterating slices
//! - `RUST_LOG`-style filtering with tracing-subscriber

use sense_grid_rs::{Color, FrameBuffer, GRID_SIZE, GridDisplay};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default to debug so the dropped-pixel log below is visible.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let mut display = GridDisplay::new(FrameBuffer::new());

    // ── Draw ───────────────────────────────────────────────────────
    // Border box.
    display.draw_line(0, 0, 7, 0, Color::BLUE)?;
    display.draw_line(7, 0, 7, 7, Color::BLUE)?;
    display.draw_line(7, 7, 0, 7, Color::BLUE)?;
    display.draw_line(0, 7, 0, 0, Color::BLUE)?;

    // Diagonals, one of them from text input the way a web form would
    // deliver it. "3,5" is the scalar 3.5, which rounds to 4.
    display.draw_line(0, 0, 7, 7, Color::RED)?;
    display.draw_line("0", "7", "7 ", "0", Color::GREEN)?;
    display.set_pixel("3,5", " 3,5 ", Color::WHITE)?;

    // Off the panel: normalizes fine, gets dropped, returns Ok(false).
    let written = display.set_pixel(12, 3, Color::WHITE)?;
    println!("off-panel write landed: {written}");

    // ── Dump ───────────────────────────────────────────────────────
    let frame = display.sink();
    for y in 0..GRID_SIZE {
        let mut row = String::new();
        for x in 0..GRID_SIZE {
            row.push(if frame.get_pixel(x, y) == Color::BLACK {
                '.'
            } else {
                '#'
            });
        }
        println!("{row}");
    }

    println!("{}", serde_json::to_string(frame.pixels())?);
    Ok(())
}
