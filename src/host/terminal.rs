//! `TerminalHost`: runs a manager in a crossterm terminal.
//!
//! One layout unit is one terminal cell.

use super::input::InputActor;
use super::{Host, HostEvent};
use crate::canvas::{Canvas, TerminalCanvas};
use crate::geometry::SizedVector2;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;

/// How the terminal host takes over the screen.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// How long the input thread blocks in one poll.
    pub input_poll_timeout: Duration,
    /// Draw on the alternate screen and restore the shell's screen on exit.
    pub alternate_screen: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
        }
    }
}

/// Host backed by the process's terminal.
pub struct TerminalHost {
    config: TerminalConfig,
    input_rx: Receiver<HostEvent>,
    input_actor: Option<InputActor>,
    canvas: TerminalCanvas,
}

impl TerminalHost {
    /// Take over the terminal with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode or
    /// the input thread cannot start.
    pub fn new() -> io::Result<Self> {
        Self::with_config(TerminalConfig::default())
    }

    /// Take over the terminal. On failure the terminal is left as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: TerminalConfig) -> io::Result<Self> {
        let (columns, rows) = terminal::size()?;
        let (input_tx, input_rx) = bounded::<HostEvent>(64);

        let started = Self::enter(&config)
            .and_then(|()| InputActor::spawn(input_tx, config.input_poll_timeout));
        let input_actor = match started {
            Ok(actor) => actor,
            Err(e) => {
                Self::leave(&config);
                return Err(e);
            }
        };

        log::debug!("terminal host started at {columns}x{rows}");
        Ok(Self {
            config,
            input_rx,
            input_actor: Some(input_actor),
            canvas: TerminalCanvas::new(columns, rows),
        })
    }

    fn enter(config: &TerminalConfig) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)
    }

    /// Undo `enter`. Errors are ignored: there is nothing left to report to.
    fn leave(config: &TerminalConfig) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }

    /// Without an input thread nothing can close the loop, so close now.
    fn disconnected() -> HostEvent {
        log::warn!("input channel disconnected, closing");
        HostEvent::CloseRequested
    }
}

impl Host for TerminalHost {
    fn screen_size(&self) -> io::Result<SizedVector2> {
        let (width, height) = terminal::size()?;
        Ok(SizedVector2::new(f32::from(width), f32::from(height)))
    }

    fn next_event(&mut self, timeout: Option<Duration>) -> Option<HostEvent> {
        let event = match timeout {
            Some(timeout) => match self.input_rx.recv_timeout(timeout) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => return None,
                Err(RecvTimeoutError::Disconnected) => Self::disconnected(),
            },
            None => self.input_rx.recv().unwrap_or_else(|_| Self::disconnected()),
        };

        if let HostEvent::Resize { width, height } = event {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            self.canvas.resize(width as u16, height as u16);
        }
        Some(event)
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn present(&mut self) -> io::Result<()> {
        self.canvas.flush_to(&mut io::stdout())
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        if let Some(actor) = self.input_actor.take() {
            actor.join();
        }
        Self::leave(&self.config);
    }
}
