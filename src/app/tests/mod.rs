mod terminal_surface;

use std::convert::Infallible;
use std::io;
use std::sync::{Arc, Mutex};

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Size;

use crate::app::App;
use crate::command::{
    CommandDispatcher, CommandSpec, CommandTable, ProcessExit, ProcessRunner,
};
use crate::config::Config;
use crate::panel::Variant;

use super::terminal_session::TerminalSurface;

pub(super) struct TestTerminalSurface {
    pub(super) terminal: Terminal<TestBackend>,
    pub(super) bells: usize,
}

impl TestTerminalSurface {
    pub(super) fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = infallible_to_io(Terminal::new(TestBackend::new(width, height)))?;
        Ok(Self { terminal, bells: 0 })
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn size(&self) -> io::Result<Size> {
        infallible_to_io(self.terminal.size())
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }

    fn bell(&mut self) -> io::Result<()> {
        self.bells += 1;
        Ok(())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

/// Records every argv it is asked to run and answers with a fixed result.
pub(super) struct StubRunner {
    exit_code: Option<i32>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl StubRunner {
    /// `None` simulates a missing executable.
    pub(super) fn new(exit_code: Option<i32>) -> Arc<Self> {
        Arc::new(Self {
            exit_code,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(super) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl ProcessRunner for StubRunner {
    fn run(&self, spec: &CommandSpec) -> io::Result<ProcessExit> {
        self.calls
            .lock()
            .expect("calls lock")
            .push(spec.argv().into_iter().map(str::to_string).collect());
        match self.exit_code {
            Some(code) => Ok(ProcessExit {
                success: code == 0,
                code: Some(code),
                stderr: String::new(),
            }),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        }
    }
}

pub(super) fn app_with_runner(variant: Variant, runner: &Arc<StubRunner>) -> App {
    let runner: Arc<dyn ProcessRunner> = runner.clone();
    let dispatcher =
        CommandDispatcher::with_runner(Arc::new(CommandTable::for_variant(variant)), runner);
    App::with_dispatcher(
        Config {
            variant,
            ..Config::default()
        },
        dispatcher,
    )
}
