use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::kv::MemKv;
use crate::model::AppConfig;
use crate::store::ItemStore;
use crate::tui::app::App;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over empty in-memory stores.
pub fn empty_app() -> App {
    let store = ItemStore::load(Box::new(MemKv::new()));
    App::new(store, Box::new(MemKv::new()), AppConfig::default())
}

/// An app with the given items added in order (so the last one is newest).
pub fn app_with_items(texts: &[&str]) -> App {
    let mut app = empty_app();
    for text in texts {
        app.store.add(text).unwrap();
    }
    app
}
