use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

struct Row {
    text: String,
    completed: bool,
}

/// Render the item list: the filtered projection, newest first, one row per
/// item. In Move mode the grabbed row is shown at its hover position.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    let mut rows: Vec<Row> = app
        .store
        .projection(app.filter)
        .iter()
        .map(|item| Row {
            text: item.text.clone(),
            completed: item.completed,
        })
        .collect();

    if rows.is_empty() {
        let placeholder = format!(" {}", app.filter.empty_message());
        let empty =
            Paragraph::new(placeholder).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Preview the in-flight reorder
    let moving_pos = match (app.mode, app.move_state) {
        (Mode::Move, Some(ms)) => {
            let row = rows.remove(ms.from.min(rows.len() - 1));
            let pos = ms.pos.min(rows.len());
            rows.insert(pos, row);
            Some(pos)
        }
        _ => None,
    };

    // Keep the cursor (or the hovering row) on screen
    let visible_height = area.height as usize;
    let focus = moving_pos.unwrap_or(app.cursor);
    if focus < app.scroll {
        app.scroll = focus;
    } else if visible_height > 0 && focus >= app.scroll + visible_height {
        app.scroll = focus - visible_height + 1;
    }

    let width = area.width as usize;
    let end = rows.len().min(app.scroll + visible_height);
    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);

    for (row, idx) in rows[app.scroll..end].iter().zip(app.scroll..end) {
        let is_moving = moving_pos == Some(idx);
        let is_cursor = moving_pos.is_none() && idx == app.cursor && app.mode == Mode::Navigate;

        let row_bg = if is_cursor || is_moving {
            app.theme.selection_bg
        } else {
            bg
        };

        let check = if row.completed { "[x]" } else { "[ ]" };
        let check_style = if row.completed {
            Style::default().fg(app.theme.done).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };

        let mut text_style = if is_moving {
            Style::default().fg(app.theme.highlight).bg(row_bg)
        } else if row.completed {
            Style::default().fg(app.theme.dim).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        if row.completed {
            text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
        }

        // " [x] text", padded to the full width so the selection bg spans the row
        let text = truncate_to_width(&row.text, width.saturating_sub(6));
        let mut spans = vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(check, check_style),
            Span::styled(" ", Style::default().bg(row_bg)),
            Span::styled(text.clone(), text_style),
        ];
        let used = 5 + crate::util::unicode::display_width(&text);
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
