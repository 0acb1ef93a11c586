use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fuel_core::Assets;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::ui::screens::{form, Action};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the form until the user quits.
///
/// Each key press is handled to completion before the next one is read.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(assets: Arc<Assets>) -> Result<()> {
    let _guard = TerminalGuard::enter().context("cannot set up the terminal")?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = form::FormScreen::new(assets);

    loop {
        terminal.draw(|f| form::draw(f, &screen))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match form::handle_key(&mut screen, k.code) {
                    Action::Quit => break,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    log::info!("form closed");
    Ok(())
}
