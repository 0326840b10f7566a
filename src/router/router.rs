//! A virtual `ActorRef` that load-balances across every actor currently
//! registered under a [`ServiceKey`]. Holds no mailbox of its own — each
//! call re-resolves the registration list from the receptionist.

// Layer 1: Standard library imports
use std::sync::Arc;

// Layer 2: Third-party crate imports
// (none)

// Layer 3: Internal module imports
use crate::actor::ActorRef;
use crate::context::Context;
use crate::dlo::DeadLetter;
use crate::error::RuntimeError;
use crate::logger::{Logger, NoopLogger};
use crate::message::Message;
use crate::receptionist::{Receptionist, ServiceKey};
use crate::util::{ActorId, MessageId};

use super::strategy::{RoundRobin, Strategy};

pub struct Router<M: Message, R> {
    key: ServiceKey<M, R>,
    receptionist: Arc<Receptionist>,
    strategy: Arc<dyn Strategy>,
    dlo: Option<Arc<ActorRef<DeadLetter, ()>>>,
    logger: Arc<dyn Logger>,
}

impl<M: Message, R> Router<M, R> {
    pub fn new(key: ServiceKey<M, R>, receptionist: Arc<Receptionist>, dlo: Option<Arc<ActorRef<DeadLetter, ()>>>) -> Self {
        Self {
            key,
            receptionist,
            strategy: Arc::new(RoundRobin::new()),
            dlo,
            logger: Arc::new(NoopLogger::new()),
        }
    }

    /// Swap in a custom selection strategy. Defaults to round-robin.
    pub fn with_strategy(mut self, strategy: Arc<dyn Strategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Route dispatch events through `logger` instead of discarding them.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    async fn route_to_dlo(&self, message_type: &'static str, reason: &'static str) {
        self.logger
            .warn(self.key.name(), "no actors registered under this key, routing to dead-letter office", None, &[]);
        if let Some(dlo) = &self.dlo {
            let background = Context::background();
            dlo.tell(
                &background,
                DeadLetter {
                    origin: ActorId::new(format!("router:{}", self.key.name())),
                    message_type,
                    envelope_id: MessageId::new(),
                    created_at: chrono::Utc::now(),
                    reason,
                },
            )
            .await;
        }
    }
}

impl<M: Message, R: Send + Sync + 'static> Router<M, R> {
    /// Resolves the current membership and tells whichever ref the
    /// strategy selects. Routes to the DLO if no one is registered.
    pub async fn tell(&self, caller_ctx: &Context, message: M) {
        let refs = self.receptionist.find(&self.key).await;
        if refs.is_empty() {
            self.route_to_dlo(message.message_type(), "no actors available").await;
            return;
        }
        let index = self.strategy.select(refs.len());
        refs[index].tell(caller_ctx, message).await;
    }

    /// Resolves the current membership and asks whichever ref the strategy
    /// selects. Fails with [`RuntimeError::NoActorsAvailable`] if no one is
    /// registered.
    pub async fn ask(&self, caller_ctx: &Context, message: M) -> Result<R, RuntimeError>
    where
        R: Clone,
    {
        let refs = self.receptionist.find(&self.key).await;
        if refs.is_empty() {
            return Err(RuntimeError::NoActorsAvailable);
        }
        let index = self.strategy.select(refs.len());
        refs[index].ask(caller_ctx, message).await
    }

    /// Tells every currently-registered ref a copy of `message`. Fire-and-
    /// forget; returns the count of refs it was sent to.
    pub async fn broadcast(&self, caller_ctx: &Context, message: M) -> usize
    where
        M: Clone,
    {
        let refs = self.receptionist.find(&self.key).await;
        for actor_ref in &refs {
            actor_ref.tell(caller_ctx, message.clone()).await;
        }
        refs.len()
    }
}
