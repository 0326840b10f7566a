//! Bridge from [`Logger`] into the `tracing` ecosystem.

use super::{Field, Logger};

/// Forwards every log call to the global `tracing` subscriber. No
/// configuration is needed — the host application wires up its own
/// subscriber, this just emits events through it.
///
/// # Examples
/// ```
/// use tessera_rt::logger::{Logger, TracingLogger};
///
/// let logger = TracingLogger::new();
/// logger.info("worker-1", "started", None, &[]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

fn fields_debug(fields: &[Field<'_>]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Logger for TracingLogger {
    fn trace(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]) {
        tracing::trace!(actor, error = ?err.map(ToString::to_string), fields = %fields_debug(fields), "{msg}");
    }

    fn debug(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]) {
        tracing::debug!(actor, error = ?err.map(ToString::to_string), fields = %fields_debug(fields), "{msg}");
    }

    fn info(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]) {
        tracing::info!(actor, error = ?err.map(ToString::to_string), fields = %fields_debug(fields), "{msg}");
    }

    fn warn(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]) {
        tracing::warn!(actor, error = ?err.map(ToString::to_string), fields = %fields_debug(fields), "{msg}");
    }

    fn error(&self, actor: &str, msg: &str, err: Option<&(dyn std::error::Error + 'static)>, fields: &[Field<'_>]) {
        tracing::error!(actor, error = ?err.map(ToString::to_string), fields = %fields_debug(fields), "{msg}");
    }
}
