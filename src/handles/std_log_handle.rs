use crate::handles::LogHandle;
use crate::{Context, Level};

/// A logger handle that forwards events to the global [`log`] facade.
///
/// The channel name is used as the log `target`, so writers that filter or
/// route by target can tell the channels apart. The eight-level severity is
/// coarsened with [`Level::to_log_level`], and a non-empty context is
/// appended to the message as compact JSON.
pub struct StdLogHandle {
    name: String,
}

impl StdLogHandle {
    /// Creates a handle with the given channel name.
    #[must_use]
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl LogHandle for StdLogHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn log(&self, level: Level, message: &str, context: &Context) {
        let log_level = level.to_log_level();
        if context.is_empty() {
            log::log!(target: &self.name, log_level, "{message}");
        } else {
            log::log!(
                target: &self.name,
                log_level,
                "{message} {}",
                serde_json::Value::Object(context.clone())
            );
        }
    }
}
