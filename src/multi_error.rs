use std::fmt;
use thiserror::Error;

/// Describes errors of `multi_logger`.
#[derive(Debug, Error)]
pub enum MultiLoggerError {
    /// The named channel is not registered.
    #[error("unable to {op} channel ({channel}): channel not found")]
    ChannelNotFound {
        /// The operation that failed to resolve the channel.
        op: ChannelOp,
        /// The channel name that was looked up.
        channel: String,
    },
    /// The string is not a valid level token.
    #[error("invalid level token ({0})")]
    ParseLevel(String),
}

/// The channel operation that triggered a [`MultiLoggerError::ChannelNotFound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOp {
    /// A channel handle was requested.
    Get,
    /// A channel was selected for the next log event.
    Select,
}

impl fmt::Display for ChannelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Select => "select",
        })
    }
}
