use crate::handles::LogHandle;
use crate::{Context, Level};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One log event as captured by a [`BufferHandle`].
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// When the event was recorded.
    pub time: DateTime<Local>,
    /// The event's severity.
    pub level: Level,
    /// The free-text message.
    pub message: String,
    /// The structured context payload, passed through unchanged.
    pub context: Context,
}

/// A logger handle that keeps events in a bounded in-memory buffer.
///
/// When the buffer is full, the oldest events are discarded. Clones share the
/// same buffer, so a clone kept by the caller can inspect what was routed to
/// the channel; this is the intended way to assert on log output in tests.
#[derive(Clone)]
pub struct BufferHandle {
    name: String,
    events: Arc<Mutex<VecDeque<LogEvent>>>,
    max_len: usize,
}

impl BufferHandle {
    /// Creates a handle with the given channel name that retains at most
    /// `max_len` events.
    #[must_use]
    pub fn new<S: Into<String>>(name: S, max_len: usize) -> Self {
        Self {
            name: name.into(),
            events: Arc::new(Mutex::new(VecDeque::new())),
            max_len,
        }
    }

    /// Returns a snapshot of the currently buffered events, oldest first.
    ///
    /// # Panics
    ///
    /// If the buffer mutex is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> Vec<LogEvent> {
        self.events.lock().unwrap().iter().cloned().collect()
    }
}

impl LogHandle for BufferHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: Level, message: &str, context: &Context) {
        let Ok(mut events) = self.events.lock() else {
            return;
        };
        events.push_back(LogEvent {
            time: Local::now(),
            level,
            message: message.to_string(),
            context: context.clone(),
        });
        while events.len() > self.max_len {
            events.pop_front();
        }
    }
}
