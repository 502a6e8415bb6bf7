// src/ui/widgets/results.rs
//! Results column: welcome text, progress, the report, or an error.
//!
//! The four views are one match over `AnalysisState`, so exactly one of
//! them can exist per frame.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table, Wrap},
};

use crate::api::AnalysisReport;
use crate::app::analysis::{AnalysisState, gauge_parts};
use crate::ui::theme::{Palette, fit_color};
use crate::ui::widgets::spinner_frame;

/// Render the results column for the current analysis state.
pub fn render_results(
    f: &mut Frame<'_>,
    area: Rect,
    state: &AnalysisState,
    models: &[String],
    frame: usize,
    colors: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" Results ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match state {
        AnalysisState::Idle => render_welcome(f, inner, colors),
        AnalysisState::Running { path } => {
            let line = Line::from(vec![
                Span::styled(spinner_frame(frame), Style::default().fg(colors.accent)),
                Span::raw(" Analyzing "),
                Span::styled(path.clone(), Style::default().fg(colors.highlight)),
            ]);
            f.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), inner);
        }
        AnalysisState::Error(message) => {
            f.render_widget(
                Paragraph::new(message.clone())
                    .style(Style::default().fg(colors.danger))
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        AnalysisState::Success(report) => render_report(f, inner, report, models, colors),
    }
}

fn render_welcome(f: &mut Frame<'_>, area: Rect, colors: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            "Token Counter",
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::raw("Browse to a folder, mark it with Space, then press a."),
        Line::raw("Totals are broken down by extension and technology,"),
        Line::raw("with a context-window gauge per model."),
        Line::raw(""),
        Line::from(Span::styled(
            "e edit path   d drives   r refresh   t theme   q quit",
            Style::default().fg(colors.muted),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_report(
    f: &mut Frame<'_>,
    area: Rect,
    report: &AnalysisReport,
    models: &[String],
    colors: &Palette,
) {
    // Gauges appear only for configured models the report scored.
    let fits: Vec<&String> = models
        .iter()
        .filter(|name| report.models.contains_key(name.as_str()))
        .collect();
    let fits_height = if fits.is_empty() {
        0
    } else {
        fits.len() as u16 + 1
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Min(4),
            Constraint::Length(fits_height),
        ])
        .split(area);

    let total = Line::from(vec![
        Span::styled("Total tokens: ", Style::default().fg(colors.muted)),
        Span::styled(
            report.total_tokens_formatted.clone(),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(total), sections[0]);

    let header_style = Style::default()
        .fg(colors.accent)
        .add_modifier(Modifier::BOLD);
    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ];

    let extension_rows: Vec<Row> = report
        .extensions
        .iter()
        .map(|row| {
            Row::new([
                row.extension.clone(),
                row.tokens_formatted.clone(),
                row.files_text.clone(),
            ])
        })
        .collect();
    let extensions = Table::new(extension_rows, widths)
        .header(Row::new(["Extension", "Tokens", "Files"]).style(header_style))
        .block(Block::default().borders(Borders::TOP).title("By extension"));
    f.render_widget(extensions, sections[1]);

    let technology_rows: Vec<Row> = report
        .technologies
        .iter()
        .map(|row| {
            Row::new([
                row.technology.clone(),
                row.tokens_formatted.clone(),
                row.files_text.clone(),
            ])
        })
        .collect();
    let technologies = Table::new(technology_rows, widths)
        .header(Row::new(["Technology", "Tokens", "Files"]).style(header_style))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title("By technology"),
        );
    f.render_widget(technologies, sections[2]);

    if fits.is_empty() {
        return;
    }
    f.render_widget(
        Paragraph::new(Span::styled(
            "Context windows",
            Style::default().fg(colors.muted),
        )),
        Rect::new(sections[3].x, sections[3].y, sections[3].width, 1),
    );
    for (row, name) in fits.iter().enumerate() {
        let y = sections[3].y + 1 + row as u16;
        if y >= sections[3].y + sections[3].height {
            break;
        }
        // Filtered on membership above.
        let Some(fit) = report.models.get(name.as_str()) else {
            continue;
        };
        let (ratio, label) = gauge_parts(fit.percentage);
        f.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(fit_color(&fit.color, colors)))
                .ratio(ratio)
                .label(format!("{name}: {label}")),
            Rect::new(sections[3].x, y, sections[3].width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ExtensionRow, ModelFit, TechnologyRow};
    use crate::config::Theme;
    use crate::ui::theme::palette;
    use ratatui::{Terminal, backend::TestBackend};
    use std::collections::HashMap;

    fn report() -> AnalysisReport {
        AnalysisReport {
            total_tokens_formatted: "1,234,567".to_string(),
            extensions: vec![ExtensionRow {
                extension: ".rs".to_string(),
                tokens_formatted: "900,000".to_string(),
                files_text: "12 files".to_string(),
            }],
            technologies: vec![TechnologyRow {
                technology: "Rust".to_string(),
                tokens_formatted: "900,000".to_string(),
                files_text: "12 files".to_string(),
            }],
            models: HashMap::from([(
                "GPT-4 (8K)".to_string(),
                ModelFit {
                    percentage: 150.0,
                    color: "danger".to_string(),
                },
            )]),
        }
    }

    fn draw(state: &AnalysisState, models: &[String]) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let colors = palette(Theme::Dark);
        terminal
            .draw(|f| {
                let area = f.area();
                render_results(f, area, state, models, 0, &colors);
            })
            .unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn success_view_shows_total_tables_and_capped_gauge() {
        let models = vec!["GPT-4 (8K)".to_string(), "Claude 3 Opus (200K)".to_string()];
        let text = draw(&AnalysisState::Success(report()), &models);

        assert!(text.contains("1,234,567"));
        assert!(text.contains("By extension"));
        assert!(text.contains("Rust"));
        // Label keeps the unclamped percentage.
        assert!(text.contains("150%"));
        // Unscored models get no gauge.
        assert!(!text.contains("Claude 3 Opus"));
    }

    #[test]
    fn error_view_shows_only_the_message() {
        let text = draw(
            &AnalysisState::Error("No text files found".to_string()),
            &[],
        );
        assert!(text.contains("No text files found"));
        assert!(!text.contains("Total tokens"));
    }

    #[test]
    fn idle_view_is_the_welcome_screen() {
        let text = draw(&AnalysisState::Idle, &[]);
        assert!(text.contains("Token Counter"));
    }
}
