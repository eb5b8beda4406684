//! Message board
//!
//! Holds at most one success or error message. Each post schedules a clear
//! after the configured delay; a newer post cancels the pending clear, and a
//! generation check stops a clear that already started from wiping the
//! newer message.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use travelgate_common::time::ScopedTimer;
use travelgate_domain::constants::DEFAULT_MESSAGE_CLEAR_MS;
use travelgate_domain::NotificationConfig;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A posted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

#[derive(Debug, Default)]
struct BoardState {
    current: Option<Message>,
    generation: u64,
}

/// Success/error messages with timed clearing.
pub struct MessageBoard {
    state: Arc<Mutex<BoardState>>,
    timer: ScopedTimer,
    clear_after: Duration,
}

impl MessageBoard {
    pub fn new(clear_after: Duration) -> Self {
        Self { state: Arc::default(), timer: ScopedTimer::new(), clear_after }
    }

    pub fn from_config(config: &NotificationConfig) -> Self {
        Self::new(Duration::from_millis(config.clear_after_ms))
    }

    /// Post a confirmation. Outside a tokio runtime the message is kept
    /// until the next post or [`Self::clear`].
    pub fn post_success(&self, text: impl Into<String>) {
        self.post(MessageKind::Success, text.into());
    }

    pub fn post_error(&self, text: impl Into<String>) {
        self.post(MessageKind::Error, text.into());
    }

    fn post(&self, kind: MessageKind, text: String) {
        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.current = Some(Message { kind, text });
            state.generation
        };
        debug!(?kind, generation, "message posted");

        let state = Arc::clone(&self.state);
        self.timer.schedule(self.clear_after, move || {
            let mut state = state.lock();
            if state.generation == generation {
                state.current = None;
            }
        });
    }

    /// Remove the current message and its pending clear.
    pub fn clear(&self) {
        self.timer.cancel();
        let mut state = self.state.lock();
        state.generation += 1;
        state.current = None;
    }

    pub fn current(&self) -> Option<Message> {
        self.state.lock().current.clone()
    }

    pub fn success(&self) -> Option<String> {
        self.text_of(MessageKind::Success)
    }

    pub fn error(&self) -> Option<String> {
        self.text_of(MessageKind::Error)
    }

    fn text_of(&self, kind: MessageKind) -> Option<String> {
        self.state.lock().current.as_ref().filter(|m| m.kind == kind).map(|m| m.text.clone())
    }
}

impl Default for MessageBoard {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MESSAGE_CLEAR_MS))
    }
}
