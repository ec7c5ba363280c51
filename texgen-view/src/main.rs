//! Application entry point for the background texture viewer.
//!
//! This binary sets up eframe/egui and delegates all UI state and
//! rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cellular Backgrounds",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new()))),
    )
}
