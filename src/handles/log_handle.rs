use crate::{Context, Level};

/// A named logger handle that records log events for one channel.
///
/// Shared instances of `LogHandle` are registered as channels of a
/// [`MultiLogger`](crate::MultiLogger).
pub trait LogHandle: Sync + Send {
    /// The handle's name; the channel is registered under it.
    ///
    /// Queried once at registration time and expected to be immutable.
    fn name(&self) -> &str;

    /// Records one log event.
    ///
    /// The context payload arrives unchanged from the log call. Failures are
    /// the handle's own responsibility; nothing is reported back through the
    /// facade.
    fn log(&self, level: Level, message: &str, context: &Context);
}
