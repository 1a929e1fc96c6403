use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, MoveState};

/// Pick up the cursor row for reordering (the drag-start gesture)
pub(super) fn enter_move_mode(app: &mut App) {
    if app.visible_len() == 0 {
        return;
    }
    app.move_state = Some(MoveState {
        from: app.cursor,
        pos: app.cursor,
    });
    app.mode = Mode::Move;
}

pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    let Some(mut ms) = app.move_state else {
        app.mode = Mode::Navigate;
        return;
    };
    let len = app.visible_len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if ms.pos + 1 < len {
                ms.pos += 1;
                app.move_state = Some(ms);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if ms.pos > 0 {
                ms.pos -= 1;
                app.move_state = Some(ms);
            }
        }

        // Drop: commit the reorder against the projection the row was
        // grabbed from
        KeyCode::Enter | KeyCode::Char('m') => {
            app.store.reorder(app.filter, ms.from, ms.pos);
            app.cursor = ms.pos.min(app.visible_len().saturating_sub(1));
            app.move_state = None;
            app.mode = Mode::Navigate;
        }

        // Cancel: the row snaps back
        KeyCode::Esc => {
            app.move_state = None;
            app.mode = Mode::Navigate;
        }

        _ => {}
    }
}
