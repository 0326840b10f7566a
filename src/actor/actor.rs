//! The actor receive loop: owns a mailbox, processes envelopes under a
//! composed context, and runs the termination sequence (close, drain to
//! DLO, optional cleanup, terminate) once its context cancels.

// Layer 1: Standard library imports
use std::sync::Arc;
use std::time::Duration;

// Layer 2: Third-party crate imports
use chrono::Utc;
use futures::FutureExt;
use tokio::task::JoinHandle;

// Layer 3: Internal module imports
use super::lifecycle::{ActorState, Lifecycle};
use super::traits::Behavior;
use crate::context::Context;
use crate::dlo::DeadLetter;
use crate::error::RuntimeError;
use crate::logger::Logger;
use crate::mailbox::{bounded, Mailbox};
use crate::message::Message;
use crate::util::{ActorId, MessageId};

use super::ref_::ActorRef;

const DEFAULT_CLEANUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Owns the running side of an actor: its cancellation context, lifecycle
/// state, and the join handle for its receive-loop task. The `ActorSystem`
/// keeps one of these per registered id; callers only ever see the
/// [`ActorRef`] this spawn returns.
pub struct ActorHandle {
    ctx: Context,
    lifecycle: Arc<Lifecycle>,
    join: JoinHandle<()>,
}

impl ActorHandle {
    /// Signal the actor to stop. Non-blocking, idempotent.
    pub fn stop(&self) {
        if self.lifecycle.try_begin_stop() {
            self.ctx.cancel();
        }
    }

    pub fn state(&self) -> ActorState {
        self.lifecycle.state()
    }

    /// Await the actor's receive-loop task to completion (including a
    /// panicking behavior — the join still resolves, it just carries the
    /// panic payload).
    pub async fn join(self) -> Result<(), tokio::task::JoinError> {
        self.join.await
    }
}

/// Spawn an actor: construction and start are the same operation here,
/// which is how the once-only `Start` guard is trivially satisfied — a
/// fresh receive-loop task can only ever be launched once per handle.
#[allow(clippy::too_many_arguments)]
pub fn spawn<M, R, B>(
    id: ActorId,
    behavior: B,
    mailbox_capacity: usize,
    dlo: Option<Arc<ActorRef<DeadLetter, ()>>>,
    cleanup_timeout: Option<Duration>,
    system_ctx: &Context,
    logger: Arc<dyn Logger>,
) -> (ActorRef<M, R>, ActorHandle)
where
    M: Message,
    R: Send + Clone + 'static,
    B: Behavior<M, R>,
{
    let actor_ctx = system_ctx.child();
    let (sender, mailbox) = bounded::<M, R>(mailbox_capacity);
    let actor_ref = ActorRef::new(id.clone(), sender, actor_ctx.clone(), dlo.clone());

    let lifecycle = Arc::new(Lifecycle::new());
    lifecycle.try_start();

    let loop_ctx = actor_ctx.clone();
    let loop_lifecycle = Arc::clone(&lifecycle);
    let cleanup_timeout = cleanup_timeout.unwrap_or(DEFAULT_CLEANUP_TIMEOUT);

    let join = tokio::spawn(run(
        id,
        behavior,
        loop_ctx,
        loop_lifecycle,
        mailbox,
        dlo,
        cleanup_timeout,
        logger,
    ));

    (actor_ref, ActorHandle { ctx: actor_ctx, lifecycle, join })
}

/// Best-effort extraction of a panic payload's message, for logging only.
fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

async fn run<M, R, B>(
    id: ActorId,
    mut behavior: B,
    ctx: Context,
    lifecycle: Arc<Lifecycle>,
    mut mailbox: Mailbox<M, R>,
    dlo: Option<Arc<ActorRef<DeadLetter, ()>>>,
    cleanup_timeout: Duration,
    logger: Arc<dyn Logger>,
) where
    M: Message,
    R: Send + Clone + 'static,
    B: Behavior<M, R>,
{
    logger.debug(id.as_str(), "actor started", None, &[]);

    while let Some(envelope) = mailbox.recv(&ctx).await {
        let process_ctx = if envelope.is_ask() {
            Context::compose(&ctx, &envelope.caller_ctx)
        } else {
            ctx.child()
        };

        let message_type = envelope.message.message_type();
        let promise = envelope.promise;
        let outcome = std::panic::AssertUnwindSafe(behavior.receive(&process_ctx, envelope.message))
            .catch_unwind()
            .await;

        let result = match outcome {
            Ok(result) => result,
            Err(panic) => {
                let panic_msg = panic_message(&panic);
                logger.error(id.as_str(), "behavior panicked", None, &[("message_type", &message_type), ("panic", &panic_msg)]);
                if let Some(promise) = promise {
                    promise.complete(Err(RuntimeError::ActorTerminated));
                }
                break;
            }
        };

        if let Some(promise) = promise {
            match result {
                Ok(value) => promise.complete(Ok(value)),
                Err(err) => {
                    logger.warn(id.as_str(), "behavior returned an error", Some(&err), &[("message_type", &message_type)]);
                    promise.complete(Err(RuntimeError::BehaviorFailed(err.to_string())));
                }
            }
        } else if let Err(err) = result {
            logger.warn(id.as_str(), "behavior returned an error", Some(&err), &[("message_type", &message_type)]);
        }
    }

    lifecycle.try_begin_stop();
    logger.debug(id.as_str(), "draining mailbox", None, &[]);

    mailbox.close().await;
    for envelope in mailbox.drain() {
        let message_type = envelope.message.message_type();
        if let Some(dlo) = &dlo {
            let background = Context::background();
            dlo.tell(
                &background,
                DeadLetter {
                    origin: id.clone(),
                    message_type,
                    envelope_id: MessageId::new(),
                    created_at: Utc::now(),
                    reason: "actor terminated",
                },
            )
            .await;
        }
        if let Some(promise) = envelope.promise {
            promise.complete(Err(RuntimeError::ActorTerminated));
        }
    }

    let cleanup_ctx = Context::background().with_timeout(cleanup_timeout);
    if let Err(err) = behavior.on_stop(&cleanup_ctx).await {
        logger.error(id.as_str(), "on_stop failed", Some(&err), &[]);
    }

    lifecycle.try_terminate();
    logger.debug(id.as_str(), "actor terminated", None, &[]);
}
