// src/ui/hits.rs
//! Click-target registry rebuilt on every draw.
//!
//! Widgets record the rectangle of each interactive element while they
//! render; the mouse handler looks the clicked cell up here. Later records
//! win, so overlays like the drives popup sit on top of what they cover.

use ratatui::layout::{Position, Rect};

/// An interactive element on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Hit {
    PathField,
    Go,
    DrivesButton,
    RefreshButton,
    ThemeButton,
    /// Breadcrumb link with its navigation target.
    Crumb(String),
    /// Listing row by index.
    Entry(usize),
    ExcludeTests,
    ExcludeDocs,
    ExcludeDependencies,
    Analyze,
    /// Drive row by index, inside the popup.
    Drive(usize),
}

/// Clickable regions of the last drawn frame.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Hit)>,
}

impl HitMap {
    /// Forget the previous frame.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an element at the area it was drawn in.
    pub fn record(&mut self, area: Rect, hit: Hit) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, hit));
        }
    }

    /// Topmost element under a cell, if any.
    pub fn hit_at(&self, column: u16, row: u16) -> Option<&Hit> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, hit)| hit)
    }
}
