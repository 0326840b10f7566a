//! System-wide configuration, with a builder for validated defaults.

// Layer 1: Standard library imports
use std::time::Duration;

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
// (none)

pub const DEFAULT_MAILBOX_CAPACITY: usize = 100;
pub const DEFAULT_CLEANUP_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// System-wide defaults applied to every actor unless overridden at
/// registration (via [`crate::system::ActorSpawnBuilder`]).
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Default mailbox capacity for actors that don't request their own.
    pub mailbox_capacity: usize,
    /// Default bound on a behavior's `on_stop` hook during termination.
    pub cleanup_timeout: Duration,
    /// Default bound on [`crate::system::ActorSystem::shutdown_default`].
    pub shutdown_timeout: Duration,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            cleanup_timeout: DEFAULT_CLEANUP_TIMEOUT,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
        }
    }
}

impl SystemConfig {
    pub fn builder() -> SystemConfigBuilder {
        SystemConfigBuilder::default()
    }
}

/// Builder for [`SystemConfig`]; unset fields fall back to the crate's
/// defaults.
#[derive(Debug, Default)]
pub struct SystemConfigBuilder {
    mailbox_capacity: Option<usize>,
    cleanup_timeout: Option<Duration>,
    shutdown_timeout: Option<Duration>,
}

impl SystemConfigBuilder {
    pub fn mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = Some(capacity);
        self
    }

    pub fn cleanup_timeout(mut self, timeout: Duration) -> Self {
        self.cleanup_timeout = Some(timeout);
        self
    }

    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = Some(timeout);
        self
    }

    pub fn build(self) -> SystemConfig {
        let defaults = SystemConfig::default();
        SystemConfig {
            mailbox_capacity: self.mailbox_capacity.unwrap_or(defaults.mailbox_capacity),
            cleanup_timeout: self.cleanup_timeout.unwrap_or(defaults.cleanup_timeout),
            shutdown_timeout: self.shutdown_timeout.unwrap_or(defaults.shutdown_timeout),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = SystemConfig::default();
        assert_eq!(config.mailbox_capacity, DEFAULT_MAILBOX_CAPACITY);
        assert_eq!(config.cleanup_timeout, DEFAULT_CLEANUP_TIMEOUT);
    }

    #[test]
    fn builder_overrides_only_the_fields_given() {
        let config = SystemConfig::builder().mailbox_capacity(16).build();
        assert_eq!(config.mailbox_capacity, 16);
        assert_eq!(config.cleanup_timeout, DEFAULT_CLEANUP_TIMEOUT);
    }
}
