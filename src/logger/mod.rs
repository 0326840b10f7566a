//! The runtime's logger hook: an opaque sink with leveled string-and-pair
//! methods, injected into every component that needs to report routine
//! lifecycle events or DLO/cleanup failures.
//!
//! The runtime never assumes a specific logging backend — `tracing`,
//! `slog`, or a test double all satisfy [`Logger`] the same way.

pub mod noop;
pub mod tracing_logger;

pub use noop::NoopLogger;
pub use tracing_logger::TracingLogger;

use std::fmt::Display;

/// A single structured key-value pair attached to a log line.
pub type Field<'a> = (&'a str, &'a dyn Display);

/// Leveled logging sink used throughout the runtime.
///
/// Every method takes the actor id the event concerns, a human-readable
/// message, an optional source error, and a slice of structured fields.
/// Implementations must not panic and must not block the caller for long —
/// actors and the system call this from their hot paths.
pub trait Logger: Send + Sync {
    fn trace(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]);
    fn debug(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]);
    fn info(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]);
    fn warn(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]);
    fn error(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]);
}
