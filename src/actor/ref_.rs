//! Typed send handles: `ActorRef` (tell + ask), `TellOnlyRef` (tell only,
//! type-erased over the response), `BaseActorRef` (id-only, the
//! receptionist's erased storage element), and `MapInputRef` (a pure
//! adapter over a `TellOnlyRef`).

// Layer 1: Standard library imports
use std::any::Any;
use std::fmt;
use std::sync::Arc;

// Layer 2: Third-party crate imports
use async_trait::async_trait;
use chrono::Utc;

// Layer 3: Internal module imports
use crate::context::Context;
use crate::dlo::DeadLetter;
use crate::error::RuntimeError;
use crate::mailbox::MailboxSender;
use crate::message::{Envelope, Message};
use crate::util::{ActorId, MessageId};

/// Capability to `tell` and `ask` a specific actor.
pub struct ActorRef<M: Message, R> {
    id: ActorId,
    sender: MailboxSender<M, R>,
    actor_ctx: Context,
    dlo: Option<Arc<ActorRef<DeadLetter, ()>>>,
}

impl<M: Message, R> Clone for ActorRef<M, R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            sender: self.sender.clone(),
            actor_ctx: self.actor_ctx.clone(),
            dlo: self.dlo.clone(),
        }
    }
}

impl<M: Message, R> fmt::Display for ActorRef<M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<M: Message, R> ActorRef<M, R> {
    pub(crate) fn new(
        id: ActorId,
        sender: MailboxSender<M, R>,
        actor_ctx: Context,
        dlo: Option<Arc<ActorRef<DeadLetter, ()>>>,
    ) -> Self {
        Self {
            id,
            sender,
            actor_ctx,
            dlo,
        }
    }

    pub fn id(&self) -> &ActorId {
        &self.id
    }

    /// A ref that is already stopped — used when the system's context is
    /// cancelled at registration time so callers still get a valid,
    /// inert `ActorRef` rather than an error.
    pub(crate) fn pre_stopped(id: ActorId) -> Self {
        let actor_ctx = Context::background();
        actor_ctx.cancel();
        let (sender, _mailbox) = crate::mailbox::bounded(1);
        Self {
            id,
            sender,
            actor_ctx,
            dlo: None,
        }
    }

    async fn route_to_dlo(&self, message_type: &'static str, reason: &'static str) {
        if let Some(dlo) = &self.dlo {
            let background = Context::background();
            dlo.tell(
                &background,
                DeadLetter {
                    origin: self.id.clone(),
                    message_type,
                    envelope_id: MessageId::new(),
                    created_at: Utc::now(),
                    reason,
                },
            )
            .await;
        }
    }

    /// Fire-and-forget. On send failure: routed to the DLO if the actor's
    /// own context is cancelled, or if the caller's context is *not*
    /// cancelled (an actor-side failure); dropped silently if the caller
    /// cancelled first.
    pub async fn tell(&self, caller_ctx: &Context, message: M) {
        let message_type = message.message_type();
        let envelope = Envelope::for_tell(message, caller_ctx.clone());
        let accepted = self.sender.send(caller_ctx, &self.actor_ctx, envelope).await;
        if accepted {
            return;
        }
        if self.actor_ctx.is_cancelled() || !caller_ctx.is_cancelled() {
            self.route_to_dlo(message_type, "send failed").await;
        }
    }

    /// Never blocks. Returns `false` on the same conditions as `tell`
    /// failing, without routing to the DLO — callers using `try_tell` are
    /// expected to handle the signal themselves.
    pub fn try_tell(&self, message: M) -> bool {
        let actor_ctx = self.actor_ctx.clone();
        self.sender.try_send(&actor_ctx, Envelope::for_tell(message, actor_ctx.clone()))
    }
}

impl<M: Message, R: Clone + Send + 'static> ActorRef<M, R> {
    /// Request/response. Resolves when the actor completes the promise or
    /// when `caller_ctx` cancels, whichever happens first.
    pub async fn ask(&self, caller_ctx: &Context, message: M) -> Result<R, RuntimeError> {
        let (envelope, future) = Envelope::for_ask(message, caller_ctx.clone());
        let accepted = self.sender.send(caller_ctx, &self.actor_ctx, envelope).await;
        if accepted {
            return future.await_result(caller_ctx).await;
        }
        if self.actor_ctx.is_cancelled() {
            Err(RuntimeError::ActorTerminated)
        } else if caller_ctx.is_cancelled() {
            Err(caller_ctx.as_error())
        } else {
            Err(RuntimeError::MailboxClosed)
        }
    }
}

impl<M: Message, R: Send + Sync + 'static> ActorRef<M, R> {
    /// Erase the response type, keeping only the tell capability.
    pub fn tell_only(&self) -> TellOnlyRef<M> {
        TellOnlyRef {
            inner: Arc::new(self.clone()),
        }
    }
}

/// Marker capability exposing only `id`, used as the erased element type
/// of the receptionist's storage. A checked downcast (via `as_any`)
/// recovers the concrete `ActorRef<M, R>`.
pub trait BaseActorRef: Send + Sync {
    fn id(&self) -> &ActorId;
    fn as_any(&self) -> &dyn Any;
}

impl<M: Message, R: Send + Sync + 'static> BaseActorRef for ActorRef<M, R> {
    fn id(&self) -> &ActorId {
        ActorRef::id(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[async_trait]
trait ErasedTell<M: Message>: Send + Sync {
    async fn tell_erased(&self, caller_ctx: &Context, message: M);
    fn id(&self) -> &ActorId;
}

#[async_trait]
impl<M: Message, R: Send + Sync + 'static> ErasedTell<M> for ActorRef<M, R> {
    async fn tell_erased(&self, caller_ctx: &Context, message: M) {
        self.tell(caller_ctx, message).await;
    }

    fn id(&self) -> &ActorId {
        ActorRef::id(self)
    }
}

/// Capability to `tell` only, with the concrete actor type erased behind
/// a trait object.
pub struct TellOnlyRef<M: Message> {
    inner: Arc<dyn ErasedTell<M>>,
}

impl<M: Message> Clone for TellOnlyRef<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: Message> TellOnlyRef<M> {
    pub fn id(&self) -> &ActorId {
        self.inner.id()
    }

    pub async fn tell(&self, caller_ctx: &Context, message: M) {
        self.inner.tell_erased(caller_ctx, message).await;
    }
}

/// A transforming tell-only ref: wraps an inner `TellOnlyRef<Out>` with a
/// pure function `In → Out`. Does not participate in receptionist type
/// registration.
pub struct MapInputRef<In, Out: Message> {
    inner: TellOnlyRef<Out>,
    map: Arc<dyn Fn(In) -> Out + Send + Sync>,
}

impl<In, Out: Message> Clone for MapInputRef<In, Out> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            map: Arc::clone(&self.map),
        }
    }
}

impl<In: Send + 'static, Out: Message> MapInputRef<In, Out> {
    pub fn new(inner: TellOnlyRef<Out>, map: impl Fn(In) -> Out + Send + Sync + 'static) -> Self {
        Self {
            inner,
            map: Arc::new(map),
        }
    }

    /// Composes the inner id for trace clarity.
    pub fn id(&self) -> String {
        format!("map({})", self.inner.id())
    }

    pub async fn tell(&self, caller_ctx: &Context, message: In) {
        let mapped = (self.map)(message);
        self.inner.tell(caller_ctx, mapped).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::BaseMessage;

    fn new_ref<M: Message>(capacity: usize) -> (ActorRef<M, ()>, crate::mailbox::Mailbox<M, ()>) {
        let (sender, mailbox) = crate::mailbox::bounded(capacity);
        let actor_ctx = Context::background();
        (ActorRef::new(ActorId::new("t"), sender, actor_ctx, None), mailbox)
    }

    #[tokio::test]
    async fn tell_delivers_into_the_mailbox() {
        let (actor_ref, mut mailbox) = new_ref::<BaseMessage>(4);
        let caller_ctx = Context::background();
        actor_ref.tell(&caller_ctx, BaseMessage).await;
        assert!(mailbox.recv(&caller_ctx).await.is_some());
    }

    #[tokio::test]
    async fn pre_stopped_ref_never_accepts_sends() {
        let actor_ref = ActorRef::<BaseMessage, ()>::pre_stopped(ActorId::new("dead"));
        let caller_ctx = Context::background();
        actor_ref.tell(&caller_ctx, BaseMessage).await;
        // No observable delivery; pre_stopped refs have no reachable mailbox.
        assert!(actor_ref.actor_ctx.is_cancelled());
    }

    #[tokio::test]
    async fn tell_only_ref_erases_response_type() {
        let (actor_ref, mut mailbox) = new_ref::<BaseMessage>(4);
        let tell_only = actor_ref.tell_only();
        let caller_ctx = Context::background();
        tell_only.tell(&caller_ctx, BaseMessage).await;
        assert!(mailbox.recv(&caller_ctx).await.is_some());
        assert_eq!(tell_only.id().as_str(), "t");
    }

    #[tokio::test]
    async fn map_input_ref_applies_function_before_forwarding() {
        #[derive(Debug, Clone)]
        struct Wrapped(u32);
        impl Message for Wrapped {
            const MESSAGE_TYPE: &'static str = "wrapped";
        }

        let (actor_ref, mut mailbox) = new_ref::<Wrapped>(4);
        let tell_only = actor_ref.tell_only();
        let mapped = MapInputRef::new(tell_only, |n: u32| Wrapped(n * 2));

        let caller_ctx = Context::background();
        mapped.tell(&caller_ctx, 21).await;
        let envelope = mailbox.recv(&caller_ctx).await.unwrap();
        assert_eq!(envelope.message.0, 42);
        assert!(mapped.id().starts_with("map("));
    }
}
