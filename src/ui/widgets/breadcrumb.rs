// src/ui/widgets/breadcrumb.rs
//! Breadcrumb row for the loaded path.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::fs::Crumb;
use crate::ui::hits::{Hit, HitMap};
use crate::ui::theme::Palette;

const SEPARATOR: &str = " › ";

/// Render the trail and record a click region per link.
pub fn render_breadcrumb(
    f: &mut Frame<'_>,
    area: Rect,
    trail: &[Crumb],
    hits: &mut HitMap,
    colors: &Palette,
) {
    let mut spans = Vec::new();
    let mut x = area.x;

    for (index, crumb) in trail.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(colors.muted)));
            x = x.saturating_add(SEPARATOR.width() as u16);
        }

        let width = crumb.label.width() as u16;
        match &crumb.target {
            Some(target) => {
                spans.push(Span::styled(
                    crumb.label.clone(),
                    Style::default()
                        .fg(colors.accent)
                        .add_modifier(Modifier::UNDERLINED),
                ));
                hits.record(Rect::new(x, area.y, width, 1), Hit::Crumb(target.clone()));
            }
            None => {
                // Final element is inert.
                spans.push(Span::styled(
                    crumb.label.clone(),
                    Style::default().fg(colors.text),
                ));
            }
        }
        x = x.saturating_add(width);
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
