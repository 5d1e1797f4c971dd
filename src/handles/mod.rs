//! This module contains the trait for logger handles that back channels,
//! and two concrete implementations.
//!
//! A channel is registered with
//! [`MultiLogger::add_channel`](crate::MultiLogger::add_channel) under the
//! handle's own name. The handle does the actual recording of log events;
//! the [`MultiLogger`](crate::MultiLogger) only routes to it.
//!
//! The shipped implementations are deliberately small: [`BufferHandle`] keeps
//! events in memory (useful in tests), [`StdLogHandle`] forwards events to
//! whatever logger is installed in the global
//! [`log`](https://crates.io/crates/log) facade. Anything that implements
//! [`LogHandle`] can serve as a channel.

mod buffer_handle;
mod log_handle;
mod std_log_handle;

pub use self::buffer_handle::{BufferHandle, LogEvent};
pub use self::log_handle::LogHandle;
pub use self::std_log_handle::StdLogHandle;
