use std::path::PathBuf;

use clap::Parser;

/// A todo list with a terminal UI and local JSON storage
#[derive(Parser)]
#[command(name = "tick", version, about)]
struct Cli {
    /// Data directory (defaults to $TICK_DIR, then ~/.tick)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    if let Err(e) = tick::tui::run(&data_dir) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TICK_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".tick"),
        Err(_) => PathBuf::from(".tick"),
    }
}
