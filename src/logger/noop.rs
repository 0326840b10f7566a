//! Zero-overhead logger that discards every event.

use super::{Field, Logger};

/// Discards every log call with zero overhead — the default sink when the
/// host application has no logging infrastructure wired up yet.
///
/// # Examples
/// ```
/// use tessera_rt::logger::{Logger, NoopLogger};
///
/// let logger = NoopLogger::new();
/// logger.debug("worker-1", "started", None, &[]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl NoopLogger {
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoopLogger {
    #[inline(always)]
    fn trace(&self, _actor: &str, _msg: &str, _err: Option<&(dyn std::error::Error + 'static)>, _fields: &[Field<'_>]) {}
    #[inline(always)]
    fn debug(&self, _actor: &str, _msg: &str, _err: Option<&(dyn std::error::Error + 'static)>, _fields: &[Field<'_>]) {}
    #[inline(always)]
    fn info(&self, _actor: &str, _msg: &str, _err: Option<&(dyn std::error::Error + 'static)>, _fields: &[Field<'_>]) {}
    #[inline(always)]
    fn warn(&self, _actor: &str, _msg: &str, _err: Option<&(dyn std::error::Error + 'static)>, _fields: &[Field<'_>]) {}
    #[inline(always)]
    fn error(&self, _actor: &str, _msg: &str, _err: Option<&(dyn std::error::Error + 'static)>, _fields: &[Field<'_>]) {}
}
