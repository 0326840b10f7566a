//! The lifecycle orchestrator: owns the receptionist, the dead-letter
//! office, and every registered actor's handle; drives deterministic
//! shutdown.

// Layer 1: Standard library imports
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

// Layer 2: Third-party crate imports
use tokio::sync::{mpsc, RwLock};

// Layer 3: Internal module imports
use crate::actor::{spawn, ActorHandle, ActorRef, Behavior};
use crate::context::Context;
use crate::dlo::{DeadLetter, LoggingDeadLetterOffice};
use crate::error::RuntimeError;
use crate::logger::{Logger, NoopLogger};
use crate::message::Message;
use crate::receptionist::{Receptionist, ServiceKey};
use crate::router::Router;
use crate::util::ActorId;

use super::builder::ActorSpawnBuilder;
use super::config::SystemConfig;

const DLO_ID_STR: &str = "dlo";

/// The runtime's single entry point: spawn and discover actors, reach the
/// dead-letter office, and shut everything down deterministically.
pub struct ActorSystem {
    config: SystemConfig,
    ctx: Context,
    receptionist: Arc<Receptionist>,
    dlo_ref: Arc<ActorRef<DeadLetter, ()>>,
    actors: RwLock<HashMap<ActorId, ActorHandle>>,
    logger: Arc<dyn Logger>,
}

impl ActorSystem {
    /// A system with a discard-everything logger — the default for tests
    /// and benches.
    pub fn new(config: SystemConfig) -> Self {
        Self::with_logger(config, Arc::new(NoopLogger::new()))
    }

    /// A system whose lifecycle events and DLO routing are logged through
    /// `logger`.
    pub fn with_logger(config: SystemConfig, logger: Arc<dyn Logger>) -> Self {
        let ctx = Context::background();
        let receptionist = Arc::new(Receptionist::new());

        let dlo_id = ActorId::new(DLO_ID_STR);
        let (dlo_ref, dlo_handle) = spawn::<DeadLetter, (), _>(
            dlo_id.clone(),
            LoggingDeadLetterOffice::new(Arc::clone(&logger)),
            config.mailbox_capacity,
            None,
            Some(config.cleanup_timeout),
            &ctx,
            Arc::clone(&logger),
        );

        let mut actors = HashMap::new();
        actors.insert(dlo_id, dlo_handle);

        Self {
            config,
            ctx,
            receptionist,
            dlo_ref: Arc::new(dlo_ref),
            actors: RwLock::new(actors),
            logger,
        }
    }

    pub fn receptionist(&self) -> &Arc<Receptionist> {
        &self.receptionist
    }

    pub fn dead_letters(&self) -> &Arc<ActorRef<DeadLetter, ()>> {
        &self.dlo_ref
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// A virtual ref load-balancing over every actor currently registered
    /// under `key` — the `ServiceKey.Ref()` convenience spec §2 names,
    /// pre-wired with this system's receptionist, dead-letter office, and
    /// logger. Defaults to round-robin; swap strategies with
    /// [`Router::with_strategy`].
    pub fn router<M, R>(&self, key: ServiceKey<M, R>) -> Router<M, R>
    where
        M: Message,
        R: Send + Sync + 'static,
    {
        Router::new(key, Arc::clone(&self.receptionist), Some(Arc::clone(&self.dlo_ref))).with_logger(Arc::clone(&self.logger))
    }

    /// Begin registering an actor. Nothing starts until `.register()` is
    /// called on the returned builder.
    pub fn spawn<M, R, B>(&self, id: ActorId, behavior: B) -> ActorSpawnBuilder<'_, M, R, B>
    where
        M: Message,
        R: Send + Sync + Clone + 'static,
        B: Behavior<M, R>,
    {
        ActorSpawnBuilder {
            system: self,
            id,
            behavior,
            mailbox_size: None,
            cleanup_timeout: None,
            key: None,
        }
    }

    pub(super) async fn spawn_internal<M, R, B>(
        &self,
        id: ActorId,
        behavior: B,
        mailbox_size: Option<usize>,
        cleanup_timeout: Option<Duration>,
        key: Option<ServiceKey<M, R>>,
    ) -> ActorRef<M, R>
    where
        M: Message,
        R: Send + Sync + Clone + 'static,
        B: Behavior<M, R>,
    {
        if self.ctx.is_cancelled() {
            self.logger.debug(id.as_str(), "register rejected: system is shutting down", None, &[]);
            return ActorRef::pre_stopped(id);
        }

        let capacity = mailbox_size.unwrap_or(self.config.mailbox_capacity);
        let cleanup = cleanup_timeout.unwrap_or(self.config.cleanup_timeout);
        let (actor_ref, handle) = spawn(
            id.clone(),
            behavior,
            capacity,
            Some(Arc::clone(&self.dlo_ref)),
            Some(cleanup),
            &self.ctx,
            Arc::clone(&self.logger),
        );

        if let Some(key) = &key {
            if let Err(err) = self.receptionist.register(key, actor_ref.clone()).await {
                self.logger.warn(id.as_str(), "registration rejected by receptionist", Some(&err), &[]);
                handle.stop();
                return ActorRef::pre_stopped(id);
            }
        }

        self.actors.write().await.insert(id, handle);
        actor_ref
    }

    /// Stop a specific actor and drop it from the id map. Returns `false`
    /// if no actor is registered under `id`.
    pub async fn stop_and_remove(&self, id: &ActorId) -> bool {
        let mut actors = self.actors.write().await;
        match actors.remove(id) {
            Some(handle) => {
                handle.stop();
                true
            }
            None => false,
        }
    }

    /// Cancels the system context first (so concurrent registrations
    /// observe it and return pre-stopped refs instead of racing the
    /// snapshot below), signals every actor to stop, then awaits them all
    /// bounded by `ctx`.
    pub async fn shutdown(&self, ctx: &Context) -> Result<(), RuntimeError> {
        self.ctx.cancel();

        let handles: Vec<ActorHandle> = {
            let mut actors = self.actors.write().await;
            actors.drain().map(|(_, handle)| handle).collect()
        };

        for handle in &handles {
            handle.stop();
        }

        let total = handles.len();
        let (tx, mut rx) = mpsc::channel::<()>(total.max(1));
        for handle in handles {
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = handle.join().await;
                let _ = tx.send(()).await;
            });
        }
        drop(tx);

        let mut joined = 0;
        while joined < total {
            tokio::select! {
                biased;
                _ = ctx.cancelled() => {
                    self.logger.error(
                        "system",
                        "shutdown deadline exceeded",
                        Some(&RuntimeError::ShutdownTimedOut),
                        &[],
                    );
                    return Err(RuntimeError::ShutdownTimedOut);
                }
                maybe = rx.recv() => match maybe {
                    Some(_) => joined += 1,
                    None => break,
                },
            }
        }
        self.logger.debug("system", "shutdown complete", None, &[]);
        Ok(())
    }

    /// Convenience over [`Self::shutdown`] bounded by `config.shutdown_timeout`.
    pub async fn shutdown_default(&self) -> Result<(), RuntimeError> {
        let ctx = Context::background().with_timeout(self.config.shutdown_timeout);
        self.shutdown(&ctx).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::BaseMessage;
    use async_trait::async_trait;
    use std::convert::Infallible;

    struct Echo;

    #[async_trait]
    impl Behavior<BaseMessage, u32> for Echo {
        type Error = Infallible;
        async fn receive(&mut self, _ctx: &Context, _message: BaseMessage) -> Result<u32, Self::Error> {
            Ok(42)
        }
    }

    #[tokio::test]
    async fn router_load_balances_over_a_keys_registrations() {
        let system = ActorSystem::new(SystemConfig::default());
        let key = ServiceKey::<BaseMessage, u32>::new("pool");
        for name in ["a", "b"] {
            system.spawn(ActorId::new(name), Echo).with_key(key.clone()).register().await;
        }

        let router = system.router(key);
        let caller_ctx = Context::background();
        assert_eq!(router.ask(&caller_ctx, BaseMessage).await, Ok(42));
        assert_eq!(router.ask(&caller_ctx, BaseMessage).await, Ok(42));

        system.shutdown_default().await.unwrap();
    }

    #[tokio::test]
    async fn spawned_actor_answers_asks() {
        let system = ActorSystem::new(SystemConfig::default());
        let actor_ref = system.spawn(ActorId::new("echo"), Echo).register().await;
        let caller_ctx = Context::background();
        assert_eq!(actor_ref.ask(&caller_ctx, BaseMessage).await, Ok(42));
        system.shutdown_default().await.unwrap();
    }

    #[tokio::test]
    async fn registering_under_a_conflicting_key_returns_a_pre_stopped_ref() {
        let system = ActorSystem::new(SystemConfig::default());
        let key_a = ServiceKey::<BaseMessage, u32>::new("conflict-test");
        let _first = system.spawn(ActorId::new("a"), Echo).with_key(key_a).register().await;

        struct OtherEcho;
        #[async_trait]
        impl Behavior<BaseMessage, String> for OtherEcho {
            type Error = Infallible;
            async fn receive(&mut self, _ctx: &Context, _message: BaseMessage) -> Result<String, Self::Error> {
                Ok("x".to_string())
            }
        }
        let key_b = ServiceKey::<BaseMessage, String>::new("conflict-test");
        let second = system.spawn(ActorId::new("b"), OtherEcho).with_key(key_b.clone()).register().await;

        assert!(system.receptionist().find(&key_b).await.is_empty());
        let caller_ctx = Context::background();
        assert_eq!(second.ask(&caller_ctx, BaseMessage).await, Err(RuntimeError::ActorTerminated));
        system.shutdown_default().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_stops_and_joins_every_registered_actor() {
        let system = ActorSystem::new(SystemConfig::default());
        let _a = system.spawn(ActorId::new("a"), Echo).register().await;
        let _b = system.spawn(ActorId::new("b"), Echo).register().await;
        assert!(system.shutdown_default().await.is_ok());
        // idempotent
        assert!(system.shutdown_default().await.is_ok());
    }

    #[tokio::test]
    async fn shutdown_reports_timeout_when_an_actor_hangs() {
        struct Hang;
        #[async_trait]
        impl Behavior<BaseMessage, ()> for Hang {
            type Error = Infallible;
            async fn receive(&mut self, ctx: &Context, _message: BaseMessage) -> Result<(), Self::Error> {
                // Never observes cancellation promptly: sleep far longer than
                // the shutdown deadline below.
                tokio::time::sleep(Duration::from_secs(5)).await;
                let _ = ctx;
                Ok(())
            }
        }

        let system = ActorSystem::new(SystemConfig::default());
        let hung = system.spawn(ActorId::new("hung"), Hang).register().await;
        let caller_ctx = Context::background();
        let _ = tokio::spawn(async move { hung.tell(&caller_ctx, BaseMessage).await });
        tokio::task::yield_now().await;

        let shutdown_ctx = Context::background().with_timeout(Duration::from_millis(50));
        let result = system.shutdown(&shutdown_ctx).await;
        assert_eq!(result, Err(RuntimeError::ShutdownTimedOut));
    }
}
