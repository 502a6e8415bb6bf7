// src/ui/theme.rs
//! Color palettes for the light and dark themes.

use ratatui::style::Color;

use crate::config::Theme;

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

/// Colors for the configured theme.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            accent: Color::Cyan,
            highlight: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        },
        Theme::Light => Palette {
            text: Color::Black,
            muted: Color::Gray,
            border: Color::Gray,
            accent: Color::Blue,
            highlight: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        },
    }
}

/// Gauge color for a model fit, from the report's color class.
pub fn fit_color(class: &str, colors: &Palette) -> Color {
    match class {
        "success" => colors.success,
        "warning" => colors.warning,
        "danger" => colors.danger,
        _ => colors.accent,
    }
}
