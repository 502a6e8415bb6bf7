// src/ui/widgets/controls.rs
//! Exclusion options and the analyze trigger under the listing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::api::AnalysisOptions;
use crate::ui::hits::{Hit, HitMap};
use crate::ui::theme::Palette;

fn checkbox(label: &str, checked: bool, key_hint: &str, colors: &Palette) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(format!("{mark} "), Style::default().fg(colors.accent)),
        Span::styled(label.to_string(), Style::default().fg(colors.text)),
        Span::styled(format!(" ({key_hint})"), Style::default().fg(colors.muted)),
    ])
}

/// Render the options box. The trigger row is clickable only while a
/// selection exists.
pub fn render_controls(
    f: &mut Frame<'_>,
    area: Rect,
    options: AnalysisOptions,
    selection_name: Option<&str>,
    hits: &mut HitMap,
    colors: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" Analysis ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = [
        (
            checkbox("Exclude tests", options.exclude_tests, "1", colors),
            Hit::ExcludeTests,
        ),
        (
            checkbox("Exclude docs", options.exclude_docs, "2", colors),
            Hit::ExcludeDocs,
        ),
        (
            checkbox(
                "Exclude dependencies",
                options.exclude_dependencies,
                "3",
                colors,
            ),
            Hit::ExcludeDependencies,
        ),
    ];

    for (row, (line, hit)) in rows.into_iter().enumerate() {
        if row as u16 >= inner.height {
            return;
        }
        let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
        f.render_widget(Paragraph::new(line), row_area);
        hits.record(row_area, hit);
    }

    if inner.height < 4 {
        return;
    }
    let trigger_area = Rect::new(inner.x, inner.y + 3, inner.width, 1);
    let trigger = match selection_name {
        Some(name) => Line::from(vec![
            Span::styled(
                "▶ Analyze ",
                Style::default()
                    .fg(colors.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(name.to_string(), Style::default().fg(colors.highlight)),
            Span::styled(" (a)", Style::default().fg(colors.muted)),
        ]),
        None => Line::from(Span::styled(
            "▶ Analyze: select a folder first",
            Style::default().fg(colors.muted),
        )),
    };
    f.render_widget(Paragraph::new(trigger), trigger_area);
    if selection_name.is_some() {
        hits.record(trigger_area, Hit::Analyze);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::ui::theme::palette;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(selection_name: Option<&str>) -> HitMap {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = HitMap::default();
        let colors = palette(Theme::Dark);
        terminal
            .draw(|f| {
                let area = f.area();
                render_controls(
                    f,
                    area,
                    AnalysisOptions::default(),
                    selection_name,
                    &mut hits,
                    &colors,
                );
            })
            .unwrap();
        hits
    }

    #[test]
    fn trigger_is_clickable_only_with_a_selection() {
        // Trigger row sits on the fourth inner line.
        let hits = draw(None);
        assert_eq!(hits.hit_at(2, 4), None);

        let hits = draw(Some("docs"));
        assert_eq!(hits.hit_at(2, 4), Some(&Hit::Analyze));
    }

    #[test]
    fn checkboxes_are_always_clickable() {
        let hits = draw(None);
        assert_eq!(hits.hit_at(2, 1), Some(&Hit::ExcludeTests));
        assert_eq!(hits.hit_at(2, 2), Some(&Hit::ExcludeDocs));
        assert_eq!(hits.hit_at(2, 3), Some(&Hit::ExcludeDependencies));
    }
}
