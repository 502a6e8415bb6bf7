// src/app/selection.rs
//! Single-selection model for the browser panel.
//!
//! At most one directory is marked for analysis at a time. Identity is
//! the full path, never the display name, so two same-named folders in
//! different places can never be highlighted together.

use crate::fs;

/// The directory currently marked for analysis, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    path: Option<String>,
    name: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a directory. Replaces any previous mark.
    pub fn select(&mut self, path: &str, name: &str) {
        self.path = Some(path.to_string());
        self.name = Some(name.to_string());
    }

    /// Mark a directory known only by path, deriving its display name
    /// from the final segment. Used when a manually typed path is
    /// committed without ever appearing in a listing.
    pub fn select_path(&mut self, path: &str) {
        self.name = Some(fs::display_name(path));
        self.path = Some(path.to_string());
    }

    pub fn clear(&mut self) {
        self.path = None;
        self.name = None;
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Analysis is offered exactly while something is marked.
    pub fn is_some(&self) -> bool {
        self.path.is_some()
    }

    /// Whether a listing row should render highlighted.
    pub fn is_selected(&self, path: &str) -> bool {
        self.path.as_deref() == Some(path)
    }
}
