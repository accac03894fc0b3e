//! Command Queue
//!
//! Hands completed input lines to the interpreter. Sending never blocks
//! and the consumer drains at most one line per loop cycle, so a burst of
//! pasted commands is spread over several frames.

use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::command::{CommandInterpreter, CommandResponse};
use crate::state::SharedState;

/// Producer half, held by the input side
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<String>,
}

impl CommandSender {
    /// Enqueue a line; returns false once the queue is gone
    pub fn submit(&self, line: impl Into<String>) -> bool {
        self.tx.send(line.into()).is_ok()
    }
}

/// A dispatched line and what the interpreter said about it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatched {
    pub line: String,
    pub response: CommandResponse,
}

/// Consumer half, held by the application loop
#[derive(Debug)]
pub struct CommandQueue {
    rx: mpsc::UnboundedReceiver<String>,
}

/// Create a connected sender/queue pair
pub fn command_queue() -> (CommandSender, CommandQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (CommandSender { tx }, CommandQueue { rx })
}

impl CommandQueue {
    /// Next pending line, if any
    pub fn try_next(&mut self) -> Option<String> {
        match self.rx.try_recv() {
            Ok(line) => Some(line),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Dispatch at most one pending line.
    ///
    /// Returns `None` when nothing is pending or the console has stopped
    /// running; lines queued behind `exit` are never dispatched.
    pub fn dispatch_next(
        &mut self,
        interpreter: &CommandInterpreter,
        state: &mut SharedState,
    ) -> Option<Dispatched> {
        if !state.running {
            return None;
        }
        let line = self.try_next()?;
        let response = interpreter.execute(state, &line);
        Some(Dispatched { line, response })
    }
}
