// src/ui/layout.rs
//! Layout computation for the UI panels.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed areas for one frame.
pub struct AppLayout {
    /// Path field and toolbar row at the top.
    pub path_bar: Rect,
    /// Breadcrumb row under it; absent at the root state.
    pub trail: Option<Rect>,
    /// Listing panel, left column.
    pub browser: Rect,
    /// Exclusion options and the analyze trigger, boxed under the listing.
    pub controls: Rect,
    /// Results column.
    pub results: Rect,
}

/// Compute the layout based on total area and breadcrumb visibility.
pub fn compute_layout(area: Rect, trail_visible: bool) -> AppLayout {
    let mut constraints = vec![Constraint::Length(3)];
    if trail_visible {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let (trail, main) = if trail_visible {
        (Some(rows[1]), rows[2])
    } else {
        (None, rows[1])
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(main);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(columns[0]);

    AppLayout {
        path_bar: rows[0],
        trail,
        browser: left[0],
        controls: left[1],
        results: columns[1],
    }
}

/// Centered popup rectangle, sized as a percentage of the full area.
pub fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
