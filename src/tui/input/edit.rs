use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Text entry for the add row. The buffer is edited at a byte-offset cursor
/// that only ever lands on grapheme boundaries.
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
        }

        // Submit: add the item, clear the buffer, keep focus in the row
        KeyCode::Enter => {
            app.submit_input();
        }

        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(&app.input_buffer, app.input_cursor) {
                app.input_buffer.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }

        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(&app.input_buffer, app.input_cursor) {
                app.input_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(&app.input_buffer, app.input_cursor) {
                app.input_cursor = next;
            }
        }
        KeyCode::Home => {
            app.input_cursor = 0;
        }
        KeyCode::End => {
            app.input_cursor = app.input_buffer.len();
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::empty_app;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, KeyEvent::from(KeyCode::Char(c)));
        }
    }

    fn input_app() -> App {
        let mut app = empty_app();
        app.mode = Mode::Input;
        app
    }

    #[test]
    fn typing_then_enter_adds_item_and_keeps_focus() {
        let mut app = input_app();
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, KeyEvent::from(KeyCode::Enter));

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.items()[0].text, "Buy milk");
        assert_eq!(app.input_buffer, "");
        assert_eq!(app.input_cursor, 0);
        assert_eq!(app.mode, Mode::Input);
    }

    #[test]
    fn enter_on_whitespace_adds_nothing() {
        let mut app = input_app();
        type_str(&mut app, "   ");
        handle_key(&mut app, KeyEvent::from(KeyCode::Enter));
        assert_eq!(app.store.len(), 0);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut app = input_app();
        type_str(&mut app, "ab");
        handle_key(&mut app, KeyEvent::from(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "a");
        assert_eq!(app.input_cursor, 1);
    }

    #[test]
    fn cursor_motion_and_mid_buffer_insert() {
        let mut app = input_app();
        type_str(&mut app, "bc");
        handle_key(&mut app, KeyEvent::from(KeyCode::Home));
        type_str(&mut app, "a");
        assert_eq!(app.input_buffer, "abc");
        handle_key(&mut app, KeyEvent::from(KeyCode::End));
        assert_eq!(app.input_cursor, 3);
        handle_key(&mut app, KeyEvent::from(KeyCode::Left));
        assert_eq!(app.input_cursor, 2);
        handle_key(&mut app, KeyEvent::from(KeyCode::Right));
        assert_eq!(app.input_cursor, 3);
    }

    #[test]
    fn esc_returns_to_navigate_without_clearing() {
        let mut app = input_app();
        type_str(&mut app, "draft");
        handle_key(&mut app, KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.input_buffer, "draft");
    }
}
