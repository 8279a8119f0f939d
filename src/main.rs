mod app;
mod infra;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use app::App;
use infra::constants::DEFAULT_DATA_DIR;
use infra::diag;
use pd_catalog::{Catalog, load_catalog};
use state::State;

fn main() -> io::Result<()> {
    // Parse CLI args
    let args: Vec<String> = std::env::args().collect();
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" if i + 1 < args.len() => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                eprintln!("Usage: promptdeck [--data-dir <path>]");
                std::process::exit(1);
            }
        }
    }

    // Panic hook: restore terminal state and log the panic to disk.
    // Without this, a panic leaves the terminal in raw mode + alternate screen
    // and the error is lost.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(DisableBracketedPaste);
        let _ = io::stdout().execute(DisableMouseCapture);
        let _ = io::stdout().execute(LeaveAlternateScreen);

        let backtrace = std::backtrace::Backtrace::force_capture();
        diag::log_error("panic.log", &format!("{}\n\n{}\n\n---", info, backtrace));

        default_hook(info);
    }));

    // Load the catalog once, before entering the alternate screen. A failed
    // load is all-or-nothing: log the diagnostic and start with empty grids.
    let catalog = match load_catalog(&data_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            diag::log_error("load.log", &format!("catalog load failed: {}", e));
            Catalog::default()
        }
    };

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    io::stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(State::new(catalog));
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}
