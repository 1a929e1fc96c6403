use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::App;

/// Render the filter tab bar (top of screen): one tab per filter, the
/// active one highlighted, plus a separator row underneath.
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for filter in Filter::ALL {
        let style = if filter == app.filter {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(filter.label(), style));
        spans.push(Span::styled("  ", Style::default().bg(bg)));
    }

    // Right-align the app name
    let title = "tick ";
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if content_width + title.len() < width {
        let padding = width - content_width - title.len();
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            title,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(tabs, Rect { height: 1, ..area });

    if area.height > 1 {
        let separator = Paragraph::new(Line::from(Span::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        frame.render_widget(
            separator,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{empty_app, render_to_string};

    #[test]
    fn shows_all_filter_labels() {
        let app = empty_app();
        let out = render_to_string(44, 2, |frame, area| {
            render_tab_bar(frame, &app, area);
        });
        assert!(out.contains("All"));
        assert!(out.contains("Pending"));
        assert!(out.contains("Completed"));
        assert!(out.contains("tick"));
    }
}
