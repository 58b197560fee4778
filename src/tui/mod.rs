pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::logging;
use crate::tui::state::AppState;
use crate::tui::view::draw;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

pub fn run() -> Result<()> {
    let (config, config_err) = Config::load_or_default();
    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("Logging disabled: {:#}", e);
    }
    if let Some(e) = config_err {
        log::warn!("using default config: {:#}", e);
    }
    logging::install_panic_hook(restore_terminal);
    log::info!("starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(config);
    let result = event_loop(&mut terminal, &mut app_state);

    restore_terminal();
    terminal.show_cursor()?;
    log::info!("exiting with {} item(s)", app_state.list.len());
    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
) -> Result<()> {
    while !app_state.quit {
        terminal.draw(|f| draw(f, app_state))?;

        // Every transition finishes before the next event is read, and the
        // loop redraws after each one.
        if let Event::Key(key) = event::read()?
            && let Some(action) = action::from_key(app_state.mode, key)
        {
            let change = app_state.apply(action);
            log::trace!("{:?} -> {:?}", action, change);
        }
    }
    Ok(())
}
