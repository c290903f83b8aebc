use std::io::{self, Stdout, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;

use crate::error::{AppError, AppResult};

pub(crate) trait TerminalSurface {
    fn size(&self) -> io::Result<Size>;

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>);

    /// Audible alert.
    fn bell(&mut self) -> io::Result<()>;
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the UI.
pub(crate) struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalSession {
    pub(crate) fn enter() -> AppResult<Self> {
        enable_raw_mode()
            .map_err(|err| AppError::terminal(format!("failed to enable raw mode: {err}")))?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            cleanup_terminal_enter_failure(None);
            return Err(AppError::terminal(format!(
                "failed to enter alternate screen: {err}"
            )));
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                cleanup_terminal_enter_failure(None);
                return Err(err.into());
            }
        };
        if let Err(err) = terminal.clear() {
            cleanup_terminal_enter_failure(Some(&mut terminal));
            return Err(err.into());
        }

        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub(crate) fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        self.active = false;
        Ok(())
    }
}

impl TerminalSurface for TerminalSession {
    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render).map(|_| ())
    }

    fn bell(&mut self) -> io::Result<()> {
        let backend = self.terminal.backend_mut();
        Write::write_all(backend, b"\x07")?;
        Write::flush(backend)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

fn cleanup_terminal_enter_failure(terminal: Option<&mut Terminal<CrosstermBackend<Stdout>>>) {
    match terminal {
        Some(terminal) => {
            let _ = execute!(
                terminal.backend_mut(),
                DisableMouseCapture,
                LeaveAlternateScreen
            );
        }
        None => {
            let mut stdout = io::stdout();
            let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
        }
    }

    let _ = disable_raw_mode();
}
