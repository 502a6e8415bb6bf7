// src/ui/widgets/mod.rs
//! Custom widgets for the toksight UI.

pub mod breadcrumb;
pub mod browser;
pub mod controls;
pub mod drives;
pub mod path_bar;
pub mod results;

// Re-export widget rendering functions
pub use breadcrumb::render_breadcrumb;
pub use browser::render_browser;
pub use controls::render_controls;
pub use drives::render_drives;
pub use path_bar::render_path_bar;
pub use results::render_results;

/// Frames for the small loading spinners.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for an animation frame counter.
pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}
