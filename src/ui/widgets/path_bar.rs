// src/ui/widgets/path_bar.rs
//! Path field and toolbar at the top of the screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::Theme;
use crate::ui::hits::{Hit, HitMap};
use crate::ui::theme::Palette;

/// Render the path field plus the Go, Drives, Refresh and theme buttons.
pub fn render_path_bar(
    f: &mut Frame<'_>,
    area: Rect,
    path_input: &str,
    editing: bool,
    theme: Theme,
    hits: &mut HitMap,
    colors: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" Path ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(9),
        ])
        .split(inner);

    // The field itself; a block cursor marks edit mode.
    let field_style = if editing {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.muted)
    };
    let mut field = vec![Span::styled(path_input.to_string(), field_style)];
    if editing {
        field.push(Span::styled("█", Style::default().fg(colors.accent)));
    }
    f.render_widget(Paragraph::new(Line::from(field)), columns[0]);
    hits.record(columns[0], Hit::PathField);

    let button = |label: &str| {
        Paragraph::new(Span::styled(
            label.to_string(),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ))
    };
    f.render_widget(button("[Go]"), columns[1]);
    hits.record(columns[1], Hit::Go);

    f.render_widget(button("[Drives]"), columns[2]);
    hits.record(columns[2], Hit::DrivesButton);

    f.render_widget(button("[Refresh]"), columns[3]);
    hits.record(columns[3], Hit::RefreshButton);

    // The label names the theme the button switches to.
    let next_theme = match theme {
        Theme::Dark => "[Light]",
        Theme::Light => "[Dark]",
    };
    f.render_widget(button(next_theme), columns[4]);
    hits.record(columns[4], Hit::ThemeButton);
}
