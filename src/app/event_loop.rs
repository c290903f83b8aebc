use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::event::DomainEvent;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::state::StatusState;
use super::terminal_session::{TerminalSession, TerminalSurface};
use super::worker::DispatchWorker;

struct LoopRuntime {
    session: TerminalSession,
    worker: DispatchWorker,
    needs_redraw: bool,
    loop_event_rx: UnboundedReceiver<DomainEvent>,
    loop_event_runtime: EventBusRuntime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Break,
}

impl App {
    /// Runs the UI until the user quits. Failed commands never end the loop.
    pub async fn run(&mut self) -> AppResult<()> {
        let mut runtime = self.initialize_loop_runtime()?;
        info!(
            variant = self.panel.variant().id(),
            actions = self.dispatcher.table().len(),
            "remote started"
        );

        let result = self.drive(&mut runtime).await;

        runtime.loop_event_runtime.shutdown();
        runtime.session.restore()?;
        if self.state.running > 0 {
            warn!(running = self.state.running, "quitting with commands still running");
        }
        info!("remote stopped");
        result
    }

    fn initialize_loop_runtime(&mut self) -> AppResult<LoopRuntime> {
        let session = TerminalSession::enter()?;
        let (loop_event_tx, loop_event_rx, loop_event_runtime) = EventBusRuntime::spawn();
        let worker = DispatchWorker::new(self.dispatcher.clone(), loop_event_tx);

        Ok(LoopRuntime {
            session,
            worker,
            needs_redraw: true,
            loop_event_rx,
            loop_event_runtime,
        })
    }

    async fn drive(&mut self, runtime: &mut LoopRuntime) -> AppResult<()> {
        loop {
            if runtime.needs_redraw {
                self.render_frame(&mut runtime.session)?;
                runtime.needs_redraw = false;
            }

            let Some(event) = runtime.loop_event_rx.recv().await else {
                return Ok(());
            };
            let control = self.handle_domain_event(
                event,
                &mut runtime.session,
                &runtime.worker,
                &mut runtime.needs_redraw,
            )?;
            if control == LoopControl::Break {
                return Ok(());
            }
        }
    }

    pub(crate) fn handle_domain_event(
        &mut self,
        event: DomainEvent,
        session: &mut impl TerminalSurface,
        worker: &DispatchWorker,
        needs_redraw: &mut bool,
    ) -> AppResult<LoopControl> {
        match event {
            DomainEvent::Input(event) => {
                let outcome = self.handle_input_event(event, session)?;
                if outcome.quit_requested {
                    return Ok(LoopControl::Break);
                }
                if let Some(action) = outcome.press
                    && self.begin_dispatch(action, worker)
                {
                    *needs_redraw = true;
                }
                if outcome.redraw {
                    *needs_redraw = true;
                }
            }
            DomainEvent::InputError(message) => {
                self.state.status = StatusState {
                    message: format!("input error: {message}"),
                    ..StatusState::default()
                };
                *needs_redraw = true;
            }
            DomainEvent::DispatchComplete(report) => {
                if self.finish_dispatch(report) {
                    session.bell()?;
                }
                *needs_redraw = true;
            }
        }
        Ok(LoopControl::Continue)
    }
}
