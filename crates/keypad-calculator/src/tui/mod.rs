//! Terminal frontend for the calculator
//!
//! Buttons are clicked with the mouse; the terminal keyboard only quits.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, UiAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{layout, render, CalculatorLayout, CalculatorUI, FOOTER, TITLE};

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{info, warn};

use crate::config::CalculatorConfig;
use crate::error::AppResult;

/// Raw mode, alternate screen and mouse capture, undone on drop
#[derive(Debug)]
struct TerminalSession<W: Write> {
    out: W,
}

impl<W: Write> TerminalSession<W> {
    fn start(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on a failure drops the session and restores the terminal
        let mut session = Self { out };
        execute!(session.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(session)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut self.out) {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}

fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw
}

/// Runs the interactive calculator until the user quits.
///
/// The terminal is restored on every exit path, including a failed setup.
pub fn run(config: &CalculatorConfig) -> AppResult<()> {
    let _session = TerminalSession::start(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    info!("terminal UI started");
    let result = run_app(&mut terminal, CalculatorApp::from_config(config));
    info!("terminal UI stopped");

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> AppResult<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| {
            app.set_viewport(f.area());
            render(&app, f);
        })?;

        let event = event::read()?;
        app.handle(input_handler.handle_event(&event));
    }

    Ok(())
}
