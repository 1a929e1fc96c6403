use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the text-entry row. In Input mode the row shows a block cursor at
/// the edit position; otherwise it shows the draft (if any) or a dim hint.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let mut spans = vec![Span::styled(
        " > ",
        Style::default().fg(app.theme.highlight).bg(bg),
    )];

    if app.mode == Mode::Input {
        let before = &app.input_buffer[..app.input_cursor];
        let after = &app.input_buffer[app.input_cursor..];
        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(
            after.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    } else if app.input_buffer.is_empty() {
        spans.push(Span::styled(
            "a to add a task",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            app.input_buffer.clone(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{empty_app, render_to_string};

    #[test]
    fn shows_hint_when_idle_and_empty() {
        let app = empty_app();
        let out = render_to_string(44, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(out.contains("a to add a task"));
    }

    #[test]
    fn shows_buffer_with_cursor_in_input_mode() {
        let mut app = empty_app();
        app.mode = Mode::Input;
        app.input_buffer = "Buy milk".into();
        app.input_cursor = 3;
        let out = render_to_string(44, 1, |frame, area| {
            render_input_row(frame, &app, area);
        });
        assert!(out.contains("Buy\u{258C} milk"));
    }
}
