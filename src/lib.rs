// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
//! A thin multi-channel routing facade for structured logging.
//!
//! `multi_logger` does not write, format, or transport log records itself.
//! It keeps a registry of named logger handles ("channels"), lets you select
//! the channel that should receive the *next* log event, and dispatches
//! severity-leveled log calls to whichever channel is currently selected,
//! reverting to a default channel after every dispatch.
//!
//! ```rust
//! use std::sync::Arc;
//! use multi_logger::{channel_name, context, handles::BufferHandle, Level, MultiLogger};
//!
//! let app = Arc::new(BufferHandle::new(channel_name::APP, 100));
//! let audit = Arc::new(BufferHandle::new(channel_name::AUDIT, 100));
//!
//! let mut log = MultiLogger::new(app);
//! log.add_channel(audit.clone());
//!
//! // goes to the default channel ("APP")
//! log.info("service started", &context! {});
//!
//! // one-shot redirect: only the next event goes to "AUDIT"
//! log.select_channel(channel_name::AUDIT).unwrap();
//! log.warning("disk low", &context! { "pct" => 92 });
//! assert_eq!(log.current_channel(), channel_name::APP);
//! assert_eq!(audit.snapshot()[0].level, Level::Warning);
//! ```
//!
//! See
//!
//! * [`MultiLogger`] for the channel registry and the dispatch contract,
//! * the module [`handles`] for the [`handles::LogHandle`] trait and the
//!   handle implementations that ship with this crate,
//! * the module [`channel_name`] for well-known channel names.

mod context;
mod level;
mod multi_error;
mod multi_logger;

pub mod channel_name;
pub mod handles;

pub use crate::context::Context;
pub use crate::level::{Level, LEVELS};
pub use crate::multi_error::{ChannelOp, MultiLoggerError};
pub use crate::multi_logger::MultiLogger;
