// src/ui/widgets/browser.rs
//! File browser listing panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::browser::BrowserState;
use crate::app::selection::Selection;
use crate::ui::hits::{Hit, HitMap};
use crate::ui::icons::icon_for_entry;
use crate::ui::theme::Palette;
use crate::ui::widgets::spinner_frame;

/// Render the listing panel for the current browser state.
pub fn render_browser(
    f: &mut Frame<'_>,
    area: Rect,
    state: &BrowserState,
    selection: &Selection,
    list_state: &mut ListState,
    frame: usize,
    hits: &mut HitMap,
    colors: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" Files ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match state {
        BrowserState::Idle => {}
        BrowserState::Loading { path } => {
            let line = Line::from(vec![
                Span::styled(spinner_frame(frame), Style::default().fg(colors.accent)),
                Span::raw(" Loading "),
                Span::styled(path.clone(), Style::default().fg(colors.muted)),
            ]);
            f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), inner);
        }
        BrowserState::Error(message) => {
            f.render_widget(
                Paragraph::new(message.clone())
                    .style(Style::default().fg(colors.danger))
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        BrowserState::Loaded(listing) if listing.entries.is_empty() => {
            f.render_widget(
                Paragraph::new("This folder is empty").style(Style::default().fg(colors.muted)),
                inner,
            );
        }
        BrowserState::Loaded(listing) => {
            let items: Vec<ListItem> = listing
                .entries
                .iter()
                .map(|entry| {
                    let icon = icon_for_entry(entry.is_dir, entry.is_parent, entry.category);
                    let style = if selection.is_selected(&entry.path) {
                        Style::default()
                            .fg(colors.highlight)
                            .add_modifier(Modifier::BOLD)
                    } else if entry.is_dir {
                        Style::default().fg(colors.accent)
                    } else {
                        Style::default().fg(colors.text)
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(format!("{icon} ")),
                        Span::styled(entry.name.clone(), style),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, inner, list_state);

            // One click region per visible row.
            let offset = list_state.offset();
            for row in 0..inner.height as usize {
                let index = offset + row;
                if index >= listing.entries.len() {
                    break;
                }
                hits.record(
                    Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
                    Hit::Entry(index),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::browser::DirectoryListing;
    use crate::config::Theme;
    use crate::ui::theme::palette;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn empty_listing_shows_the_empty_state_without_rows() {
        let backend = TestBackend::new(32, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = BrowserState::Loaded(DirectoryListing {
            current_path: "/empty".to_string(),
            segments: vec!["empty".to_string()],
            entries: vec![],
        });
        let selection = Selection::new();
        let mut list_state = ListState::default();
        let mut hits = HitMap::default();
        let colors = palette(Theme::Dark);

        terminal
            .draw(|f| {
                let area = f.area();
                render_browser(
                    f,
                    area,
                    &state,
                    &selection,
                    &mut list_state,
                    0,
                    &mut hits,
                    &colors,
                );
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("This folder is empty"));
        // No row regions were registered inside the panel.
        assert_eq!(hits.hit_at(2, 1), None);
    }

    #[test]
    fn error_state_replaces_the_listing_text() {
        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = BrowserState::Error("Permission denied".to_string());
        let selection = Selection::new();
        let mut list_state = ListState::default();
        let mut hits = HitMap::default();
        let colors = palette(Theme::Dark);

        terminal
            .draw(|f| {
                let area = f.area();
                render_browser(
                    f,
                    area,
                    &state,
                    &selection,
                    &mut list_state,
                    0,
                    &mut hits,
                    &colors,
                );
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("Permission denied"));
    }
}
