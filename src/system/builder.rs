//! A fluent surface over actor registration, sugar over the
//! `mailbox_size`/`cleanup_timeout`/`key` options `ActorSystem::spawn`
//! otherwise takes positionally.

// Layer 1: Standard library imports
use std::time::Duration;

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use crate::actor::{ActorRef, Behavior};
use crate::message::Message;
use crate::receptionist::ServiceKey;
use crate::util::ActorId;

use super::actor_system::ActorSystem;

/// Returned by [`ActorSystem::spawn`]; call `.register()` to actually
/// start the actor. Every setter is optional — system defaults apply to
/// anything left unset.
pub struct ActorSpawnBuilder<'sys, M: Message, R, B: Behavior<M, R>> {
    pub(super) system: &'sys ActorSystem,
    pub(super) id: ActorId,
    pub(super) behavior: B,
    pub(super) mailbox_size: Option<usize>,
    pub(super) cleanup_timeout: Option<Duration>,
    pub(super) key: Option<ServiceKey<M, R>>,
}

impl<'sys, M, R, B> ActorSpawnBuilder<'sys, M, R, B>
where
    M: Message,
    R: Send + Sync + Clone + 'static,
    B: Behavior<M, R>,
{
    pub fn with_mailbox_size(mut self, size: usize) -> Self {
        self.mailbox_size = Some(size);
        self
    }

    pub fn with_cleanup_timeout(mut self, timeout: Duration) -> Self {
        self.cleanup_timeout = Some(timeout);
        self
    }

    /// Register the spawned actor with the receptionist under `key`. If the
    /// name is already bound to a different signature, `register()` returns
    /// a pre-stopped ref instead of starting the actor.
    pub fn with_key(mut self, key: ServiceKey<M, R>) -> Self {
        self.key = Some(key);
        self
    }

    /// Start the actor (and, if `with_key` was called, register it).
    pub async fn register(self) -> ActorRef<M, R> {
        self.system
            .spawn_internal(self.id, self.behavior, self.mailbox_size, self.cleanup_timeout, self.key)
            .await
    }
}
