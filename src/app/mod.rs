// src/app/mod.rs
//! Application module - state machines for browsing and analysis.

pub mod analysis;
pub mod browser;
pub mod drives;
pub mod selection;
pub mod state;

// Re-export commonly used types
pub use analysis::{Analysis, AnalysisState};
pub use browser::{Browser, BrowserState, DirectoryListing, Entry};
pub use drives::{DrivesPanel, DrivesState};
pub use selection::Selection;
pub use state::App;
