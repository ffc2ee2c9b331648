//! Raw-mode terminal loop
//!
//! Redraws a single display line after every key. `q` or Ctrl+C exits.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{InputAction, InputHandler};
use crate::session::Session;
use console::style;
use crossterm::{
    cursor, event,
    event::Event,
    queue,
    terminal::{self, ClearType},
};
use keycalc::driver::KeyDriver;
use keycalc::editor::{DisplayState, KeyOutcome};
use std::io::{self, Write};
use tracing::debug;

/// Disables raw mode when dropped, including on early return
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> CliResult<Self> {
        terminal::enable_raw_mode()
            .map_err(|e| CliError::terminal(format!("cannot enable raw mode: {e}")))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // nothing left to report to once the loop is gone
        let _ = terminal::disable_raw_mode();
    }
}

/// Renders the display line for a session
#[must_use]
pub fn render_line(session: &Session) -> String {
    let display = session.display();
    let shown = match session.editor().display_state() {
        DisplayState::ErrorSentinel => style(display).red().bold(),
        DisplayState::Zero | DisplayState::Expression => style(display).bold(),
    };
    format!("{} {shown}", style(">").dim())
}

fn redraw(out: &mut impl Write, session: &Session) -> io::Result<()> {
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(out, "{}", render_line(session))?;
    out.flush()
}

/// Runs interactive mode until the user quits
pub fn run(config: &CliConfig) -> CliResult<()> {
    let mut session = Session::new(config);
    let handler = InputHandler::new();
    let mut stdout = io::stdout();

    let guard = RawModeGuard::enable()?;
    redraw(&mut stdout, &session)?;

    loop {
        let event = event::read()
            .map_err(|e| CliError::terminal(format!("cannot read key event: {e}")))?;
        let Event::Key(key_event) = event else {
            continue;
        };

        match handler.handle_key(key_event) {
            InputAction::Quit => break,
            InputAction::None => {}
            InputAction::Press(key) => {
                let outcome = session.press(key);
                if outcome == KeyOutcome::Rejected {
                    debug!(%key, "ignored in interactive mode");
                }
                redraw(&mut stdout, &session)?;
            }
        }
    }

    drop(guard);
    writeln!(stdout)?;
    Ok(())
}
