// src/ui/widgets/drives.rs
//! Drives popup overlay.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::drives::DrivesState;
use crate::ui::hits::{Hit, HitMap};
use crate::ui::icons::drive_icon;
use crate::ui::layout::popup_area;
use crate::ui::theme::Palette;
use crate::ui::widgets::spinner_frame;

/// Render the drives popup centered over the screen.
pub fn render_drives(
    f: &mut Frame<'_>,
    screen: Rect,
    state: &DrivesState,
    cursor: usize,
    frame: usize,
    hits: &mut HitMap,
    colors: &Palette,
) {
    let popup = popup_area(screen, 44, 40);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent))
        .title(" Drives ");
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    match state {
        DrivesState::NotLoaded => {}
        DrivesState::Loading => {
            let line = Line::from(vec![
                Span::styled(spinner_frame(frame), Style::default().fg(colors.accent)),
                Span::raw(" Looking for drives"),
            ]);
            f.render_widget(Paragraph::new(line), inner);
        }
        DrivesState::Error(message) => {
            f.render_widget(
                Paragraph::new(message.clone())
                    .style(Style::default().fg(colors.danger))
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        DrivesState::Loaded(drives) if drives.is_empty() => {
            f.render_widget(
                Paragraph::new("No drives reported").style(Style::default().fg(colors.muted)),
                inner,
            );
        }
        DrivesState::Loaded(drives) => {
            let items: Vec<ListItem> = drives
                .iter()
                .map(|drive| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{} ", drive_icon(&drive.icon)),
                            Style::default().fg(colors.accent),
                        ),
                        Span::styled(drive.name.clone(), Style::default().fg(colors.text)),
                        Span::styled(
                            format!("  {}", drive.path),
                            Style::default().fg(colors.muted),
                        ),
                    ]))
                })
                .collect();

            let mut list_state = ListState::default();
            list_state.select(Some(cursor));
            let list = List::new(items)
                .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol(">> ");
            f.render_stateful_widget(list, inner, &mut list_state);

            let offset = list_state.offset();
            for row in 0..inner.height as usize {
                let index = offset + row;
                if index >= drives.len() {
                    break;
                }
                hits.record(
                    Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
                    Hit::Drive(index),
                );
            }
        }
    }
}
