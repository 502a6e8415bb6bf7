// src/fs/mod.rs
//! Remote-filesystem model: canonical paths and name-based categorization.

pub mod detection;
pub mod path;

// Re-export commonly used types
pub use detection::{FileCategory, category_for};
pub use path::{Crumb, ROOT, display_name, segments, subpath, trail};
