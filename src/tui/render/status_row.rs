use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Counter text for the number of pending tasks
pub fn tasks_left_label(n: usize) -> String {
    if n == 1 {
        format!("{} task left", n)
    } else {
        format!("{} tasks left", n)
    }
}

/// Render the status row (bottom of screen): pending counter on the left,
/// key hints for the current mode on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let counter = format!(" {}", tasks_left_label(app.store.pending_count()));
    let mut spans = vec![Span::styled(
        counter,
        Style::default().fg(app.theme.text).bg(bg),
    )];

    let hint = match app.mode {
        Mode::Navigate => "a add  Enter toggle  d delete  m move  c clear  t theme  q quit ",
        Mode::Input => "Enter add  Esc done ",
        Mode::Move => "j/k move  Enter drop  Esc cancel ",
    };
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
