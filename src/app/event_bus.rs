use crossterm::event::{Event, EventStream, MouseButton, MouseEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::event::DomainEvent;

/// Owns the background tasks feeding the event loop.
pub(crate) struct EventBusRuntime {
    tasks: Vec<JoinHandle<()>>,
}

impl EventBusRuntime {
    pub(crate) fn spawn() -> (
        UnboundedSender<DomainEvent>,
        UnboundedReceiver<DomainEvent>,
        Self,
    ) {
        let (tx, rx) = unbounded_channel();
        let tasks = vec![spawn_terminal_input_task(tx.clone())];
        (tx, rx, Self { tasks })
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

fn spawn_terminal_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) if wakes_loop(&event) => DomainEvent::Input(event),
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "terminal input error");
                    DomainEvent::InputError(err.to_string())
                }
            };
            if tx.send(loop_event).is_err() {
                debug!("event loop gone, stopping input task");
                return;
            }
        }
    })
}

/// Mouse motion, drags and focus changes never change what is on screen.
pub(crate) fn wakes_loop(event: &Event) -> bool {
    match event {
        Event::Key(_) | Event::Resize(_, _) => true,
        Event::Mouse(mouse) => mouse.kind == MouseEventKind::Down(MouseButton::Left),
        _ => false,
    }
}
