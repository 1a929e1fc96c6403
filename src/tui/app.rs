use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::kv::{FileKv, KvStore, THEME_KEY};
use crate::model::{AppConfig, Filter};
use crate::store::ItemStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the cursor over the list
    Navigate,
    /// Typing into the entry row
    Input,
    /// A row has been picked up for reordering
    Move,
}

/// A row picked up in Move mode. Both indices address the current
/// projection: `from` is where the row was grabbed, `pos` is where it
/// currently hovers.
#[derive(Debug, Clone, Copy)]
pub struct MoveState {
    pub from: usize,
    pub pos: usize,
}

/// Main application state
pub struct App {
    pub store: ItemStore,
    /// Backing store for the theme preference (second logical key)
    pub prefs: Box<dyn KvStore>,
    pub config: AppConfig,
    pub filter: Filter,
    pub mode: Mode,
    pub theme: Theme,
    pub dark: bool,
    /// Cursor index into the current projection
    pub cursor: usize,
    /// First visible list row (kept in range by the list renderer)
    pub scroll: usize,
    /// Entry-row contents
    pub input_buffer: String,
    /// Byte offset of the entry-row cursor
    pub input_cursor: usize,
    pub move_state: Option<MoveState>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: ItemStore, prefs: Box<dyn KvStore>, config: AppConfig) -> Self {
        let dark = prefs.load(THEME_KEY).is_some_and(|v| v == "true");
        let theme = Theme::from_config(dark, &config.ui);
        App {
            store,
            prefs,
            config,
            filter: Filter::All,
            mode: Mode::Navigate,
            theme,
            dark,
            cursor: 0,
            scroll: 0,
            input_buffer: String::new(),
            input_cursor: 0,
            move_state: None,
            should_quit: false,
        }
    }

    /// Number of rows in the current projection
    pub fn visible_len(&self) -> usize {
        self.store.projection(self.filter).len()
    }

    /// Pull the cursor back in range after a mutation shrank the projection
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// The id of the item under the cursor, if any
    pub fn cursor_item_id(&self) -> Option<i64> {
        self.store
            .projection(self.filter)
            .get(self.cursor)
            .map(|item| item.id)
    }

    /// Switch filters — a pure view-state change, the store is untouched
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.cursor = 0;
        }
    }

    /// Flip the light/dark palette and persist the preference (best-effort)
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        self.theme = Theme::from_config(self.dark, &self.config.ui);
        let _ = self
            .prefs
            .save(THEME_KEY, if self.dark { "true" } else { "false" });
    }

    /// Submit the entry row. On success the buffer clears and focus stays
    /// in the entry row; rejected (empty) input leaves the buffer alone.
    pub fn submit_input(&mut self) {
        if self.store.add(&self.input_buffer).is_ok() {
            self.input_buffer.clear();
            self.input_cursor = 0;
        }
    }
}

/// Run the TUI application against the given data directory
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(data_dir)?;

    let config = read_config(data_dir);
    let store = ItemStore::load(Box::new(FileKv::new(data_dir)));
    let prefs = Box::new(FileKv::new(data_dir));
    let mut app = App::new(store, prefs, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
