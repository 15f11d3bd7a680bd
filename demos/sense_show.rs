//! # Sense HAT Show Example
//!
//! Draws a slow border-and-cross animation on the real panel, then
//! scrolls a greeting, the way the classroom exercises did: each line
//! appears pixel by pixel.
//!
//! ## Run it (on the Pi, with the HAT attached)
//! ```sh
//! cargo build --release --example sense_show --features hardware
//! ./target/release/examples/sense_show
//! ```
//!
//! ## Rust concepts introduced
//! - Feature-gated compilation: this file builds to a stub without
//!   the `hardware` feature
//! - `Arc<AtomicBool>` shared between a signal handler and the main loop
//! - Clean shutdown with Ctrl+C

#[cfg(not(feature = "hardware"))]
fn main() {
    eprintln!("This example requires the 'hardware' feature.");
}

#[cfg(feature = "hardware")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use sense_grid_rs::{Color, GridDisplay, SenseHatScreen};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    tracing_subscriber::fmt().with_target(false).compact().init();

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let mut display = GridDisplay::new(SenseHatScreen::open()?);
    display.set_brightness(60);
    let pace = Duration::from_millis(80);

    // ── Main loop ──────────────────────────────────────────────────
    while running.load(Ordering::SeqCst) {
        display.clear();

        // Border box, one visible pixel at a time.
        display.draw_line_paced(0, 0, 7, 0, Color::BLUE, pace)?;
        display.draw_line_paced(7, 0, 7, 7, Color::BLUE, pace)?;
        display.draw_line_paced(7, 7, 0, 7, Color::BLUE, pace)?;
        display.draw_line_paced(0, 7, 0, 0, Color::BLUE, pace)?;

        // Then the cross.
        display.draw_line_paced(0, 0, 7, 7, Color::RED, pace)?;
        display.draw_line_paced(0, 7, 7, 0, Color::GREEN, pace)?;

        display.show_message("HI!", Color::WHITE, Color::BLACK, pace);
    }

    display.clear();
    println!("\nShutting down cleanly.");
    Ok(())
}
