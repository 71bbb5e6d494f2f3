use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::config::Config;
use crate::controller::Controller;

use super::{App, event_loop};

pub(in crate::tui_shell) fn run(config: &Config) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the interactive list requires a terminal (TTY); see `checklist --help`");
    }

    let store = config.open_store()?;
    let controller = Controller::start(store, config.namespace.clone());
    let location = format!("{} @ {}", config.namespace, config.data_dir.display());
    let mut app = App::new(controller, location);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    restore_on_err(
        execute!(stdout, EnterAlternateScreen).context("enter alternate screen"),
        restore_terminal,
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = restore_on_err(
        Terminal::new(backend).context("create terminal"),
        restore_terminal,
    )?;
    terminal.clear().ok();

    info!(namespace = %app.controller.namespace(), "interactive session started");
    let res = event_loop::run_loop(&mut terminal, &mut app);

    restore_terminal();
    terminal.show_cursor().ok();

    res
}

/// Runs `restore` when `res` is an error, then hands `res` back.
pub(super) fn restore_on_err<T>(res: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if res.is_err() {
        restore();
    }
    res
}

fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}
