use crate::context::Context;
use crate::handles::LogHandle;
use crate::level::Level;
use crate::multi_error::{ChannelOp, MultiLoggerError};
use std::collections::HashMap;
use std::sync::Arc;

/// Routes log events to one of several named logger handles ("channels").
///
/// A `MultiLogger` is constructed around one handle, which becomes the
/// *default channel*. Further handles can be registered with
/// [`add_channel`](MultiLogger::add_channel). Every severity method resolves
/// the *current channel*, delegates the event to its handle, and then resets
/// the current channel back to the default, so a
/// [`select_channel`](MultiLogger::select_channel) call redirects exactly one
/// subsequent log event.
///
/// All mutating methods take `&mut self`; a `MultiLogger` shared between
/// threads must be wrapped in a `Mutex` (or similar) by the caller, which also
/// keeps the select-dispatch-reset cycle atomic.
pub struct MultiLogger {
    default_channel: String,
    current_channel: String,
    channels: HashMap<String, Arc<dyn LogHandle>>,
}

impl MultiLogger {
    /// Creates a `MultiLogger` with the given handle registered under its own
    /// name, which becomes both the default and the current channel.
    #[must_use]
    pub fn new(handle: Arc<dyn LogHandle>) -> Self {
        let name = handle.name().to_string();
        let mut multi_logger = Self {
            default_channel: name.clone(),
            current_channel: name,
            channels: HashMap::new(),
        };
        multi_logger.add_channel(handle);
        multi_logger
    }

    /// Returns the names of all registered channels, in no particular order.
    #[must_use]
    pub fn channels(&self) -> Vec<String> {
        self.channels.keys().cloned().collect()
    }

    /// Returns the name of the default channel.
    #[must_use]
    pub fn default_channel(&self) -> &str {
        &self.default_channel
    }

    /// Returns the name of the current channel, i.e. the channel that will
    /// receive the next log event.
    #[must_use]
    pub fn current_channel(&self) -> &str {
        &self.current_channel
    }

    /// Registers a handle as a channel under the handle's own name.
    ///
    /// An existing channel with the same name is overwritten. Neither the
    /// default nor the current channel changes.
    pub fn add_channel(&mut self, handle: Arc<dyn LogHandle>) -> &mut Self {
        self.channels.insert(handle.name().to_string(), handle);
        self
    }

    /// Returns whether a channel with the given name is registered.
    #[must_use]
    pub fn is_channel(&self, channel: &str) -> bool {
        self.channels.contains_key(channel)
    }

    /// Returns the handle registered for the given channel name.
    ///
    /// An empty name resolves to the current channel.
    ///
    /// # Errors
    ///
    /// `MultiLoggerError::ChannelNotFound` if the resolved name is not a
    /// registered channel.
    pub fn get_channel(&self, channel: &str) -> Result<Arc<dyn LogHandle>, MultiLoggerError> {
        let channel = if channel.is_empty() {
            self.current_channel()
        } else {
            channel
        };
        self.channels.get(channel).cloned().ok_or_else(|| {
            MultiLoggerError::ChannelNotFound {
                op: ChannelOp::Get,
                channel: channel.to_string(),
            }
        })
    }

    /// Sets the channel to be used for the next logged event.
    ///
    /// The selection is one-shot: each dispatched event resets the current
    /// channel to the default. Selecting again before dispatching replaces
    /// the previous selection.
    ///
    /// # Errors
    ///
    /// `MultiLoggerError::ChannelNotFound` if no channel with the given name
    /// is registered.
    pub fn select_channel(&mut self, channel: &str) -> Result<&mut Self, MultiLoggerError> {
        if !self.is_channel(channel) {
            return Err(MultiLoggerError::ChannelNotFound {
                op: ChannelOp::Select,
                channel: channel.to_string(),
            });
        }
        self.current_channel = channel.to_string();
        Ok(self)
    }

    // Resolves the current channel, delegates, and resets to the default.
    //
    // If the current channel cannot be resolved the event is dropped and the
    // current channel is NOT reset; see the quirk note on `log`.
    fn dispatch(&mut self, level: Level, message: &str, context: &Context) {
        let Some(handle) = self.channels.get(&self.current_channel) else {
            return;
        };
        handle.log(level, message, context);
        self.current_channel.clone_from(&self.default_channel);
    }

    /// System is unusable.
    pub fn emergency(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Emergency, message, context);
    }

    /// Action must be taken immediately.
    ///
    /// Example: entire website down, database unavailable.
    pub fn alert(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Alert, message, context);
    }

    /// Critical conditions.
    ///
    /// Example: application component unavailable, unexpected exception.
    pub fn critical(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Critical, message, context);
    }

    /// Runtime errors that do not require immediate action but should
    /// typically be logged and monitored.
    pub fn error(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Error, message, context);
    }

    /// Exceptional occurrences that are not errors.
    ///
    /// Example: use of deprecated APIs, undesirable things that are not
    /// necessarily wrong.
    pub fn warning(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Warning, message, context);
    }

    /// Normal but significant events.
    pub fn notice(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Notice, message, context);
    }

    /// Interesting events.
    ///
    /// Example: user logs in, SQL logs.
    pub fn info(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Info, message, context);
    }

    /// Detailed debug information.
    pub fn debug(&mut self, message: &str, context: &Context) {
        self.dispatch(Level::Debug, message, context);
    }

    /// Logs with an explicit level.
    ///
    /// The event goes to the current channel, after which the current channel
    /// is reset to the default. If the current channel cannot be resolved
    /// (possible only if its name was corrupted from outside the crate, since
    /// [`select_channel`](MultiLogger::select_channel) validates existence),
    /// the event is silently dropped and the current channel keeps its stale
    /// value until a valid selection is made.
    pub fn log(&mut self, level: Level, message: &str, context: &Context) {
        self.dispatch(level, message, context);
    }
}
