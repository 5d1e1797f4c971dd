//! Well-known channel names.
//!
//! These constants are a naming convenience only; any string can be used as a
//! channel name, and nothing in this crate validates names against this list.

/// General application events.
pub const APP: &str = "APP";
/// Audit trail events.
pub const AUDIT: &str = "AUDIT";
/// Command-line invocations.
pub const CLI: &str = "CLI";
/// Database queries and errors.
pub const DATABASE: &str = "DATABASE";
/// Controller-layer events.
pub const CONTROLLER: &str = "CONTROLLER";
/// Development diagnostics.
pub const DEV: &str = "DEV";
/// Application errors.
pub const ERROR: &str = "ERROR";
/// Health checks.
pub const HEALTH: &str = "HEALTH";
/// HTTP client traffic.
pub const HTTP: &str = "HTTP";
/// Background jobs.
pub const JOB: &str = "JOB";
/// Model-layer events.
pub const MODEL: &str = "MODEL";
/// Outbound notifications.
pub const NOTIFICATION: &str = "NOTIFICATION";
/// Operations events.
pub const OPS: &str = "OPS";
/// Privilege changes.
pub const PRIVILEGES: &str = "PRIVILEGES";
/// Production environment events.
pub const PROD: &str = "PROD";
/// Quality assurance events.
pub const QA: &str = "QA";
/// Queue processing.
pub const QUEUE: &str = "QUEUE";
/// Inbound requests.
pub const REQUEST: &str = "REQUEST";
/// Outbound responses.
pub const RESPONSE: &str = "RESPONSE";
/// Routing decisions.
pub const ROUTER: &str = "ROUTER";
/// Scheduled tasks.
pub const SCHEDULE: &str = "SCHEDULE";
/// Security events.
pub const SECURITY: &str = "SECURITY";
/// Staging environment events.
pub const STAGING: &str = "STAGING";
/// Storage access.
pub const STORAGE: &str = "STORAGE";
