//! mates — two-scene math demo
//!
//! A landing screen with a resizable image, and an arithmetic screen
//! computing +, -, *, / on two integer operands.

mod app;
mod calc;
mod scenes;

use app::MatesApp;
use eframe::NativeOptions;

/// Bundled landing image, embedded at compile time.
const MATH_PNG: &[u8] = include_bytes!("../assets/math.png");

fn main() -> eframe::Result<()> {
    // A broken embedded asset is a broken build: fail before the event
    // loop ever starts.
    let portada = match matecore::assets::decode_image(MATH_PNG) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("mates: {err}");
            std::process::exit(1);
        }
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_title("mates"),
        ..Default::default()
    };

    eframe::run_native(
        "mates",
        options,
        Box::new(|cc| Box::new(MatesApp::new(cc, portada))),
    )
}
