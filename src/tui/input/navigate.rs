use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Mode};

use super::move_mode::enter_move_mode;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }

        // Cursor movement
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // Toggle the item under the cursor (click on checkbox or text)
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_item_id() {
                app.store.toggle(id);
                app.clamp_cursor();
            }
        }

        // Delete the item under the cursor
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.cursor_item_id() {
                app.store.delete(id);
                app.clamp_cursor();
            }
        }

        // Enter the text-entry row
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.mode = Mode::Input;
        }

        // Filter selection — pure view state, no store call
        KeyCode::Tab => {
            app.set_filter(app.filter.next());
        }
        KeyCode::Char('1') => app.set_filter(Filter::All),
        KeyCode::Char('2') => app.set_filter(Filter::Pending),
        KeyCode::Char('3') => app.set_filter(Filter::Completed),

        KeyCode::Char('c') => {
            app.store.clear_completed();
            app.clamp_cursor();
        }

        // Pick up the cursor row for reordering (drag analog)
        KeyCode::Char('m') => {
            enter_move_mode(app);
        }

        KeyCode::Char('t') => {
            app.toggle_theme();
        }

        _ => {}
    }
}
