// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use chrono::{DateTime, Utc};

// Layer 3: Internal module imports
use super::traits::Message;
use crate::context::Context;
use crate::promise::{self, Future, Promise};
use crate::util::MessageId;

/// A message in transit to an actor's mailbox, paired with whatever makes
/// `tell` and `ask` differ: `tell` carries no promise, `ask` does.
///
/// `R` is the response type an `ask` expects; for a `tell`-only envelope it
/// is whatever the target actor's `ActorRef` response type is — the
/// promise field is simply `None` and never touched.
pub struct Envelope<M: Message, R> {
    pub message: M,
    pub promise: Option<Promise<R>>,
    pub caller_ctx: Context,
    pub id: MessageId,
    pub created_at: DateTime<Utc>,
}

impl<M: Message, R> Envelope<M, R> {
    /// Build a `tell` envelope: no promise, caller cancellation has no
    /// effect on processing once accepted.
    pub fn for_tell(message: M, caller_ctx: Context) -> Self {
        Self {
            message,
            promise: None,
            caller_ctx,
            id: MessageId::new(),
            created_at: Utc::now(),
        }
    }

    /// Build an `ask` envelope and its paired future in one step.
    pub fn for_ask(message: M, caller_ctx: Context) -> (Self, Future<R>) {
        let (promise, future) = promise::pair();
        let envelope = Self {
            message,
            promise: Some(promise),
            caller_ctx,
            id: MessageId::new(),
            created_at: Utc::now(),
        };
        (envelope, future)
    }

    /// True for envelopes built by [`Self::for_ask`].
    pub fn is_ask(&self) -> bool {
        self.promise.is_some()
    }

    /// Stable textual tag of the carried message.
    pub fn message_type(&self) -> &'static str {
        self.message.message_type()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::BaseMessage;

    #[test]
    fn tell_envelope_has_no_promise() {
        let env = Envelope::<BaseMessage, ()>::for_tell(BaseMessage, Context::background());
        assert!(!env.is_ask());
        assert_eq!(env.message_type(), "base");
    }

    #[test]
    fn ask_envelope_carries_a_promise_and_future() {
        let (env, future) = Envelope::<BaseMessage, u32>::for_ask(BaseMessage, Context::background());
        assert!(env.is_ask());
        let promise = env.promise.as_ref().unwrap();
        promise.complete(Ok(7));
        // The paired future observes what the envelope's promise completed.
        let ctx = Context::background();
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let result = rt.block_on(future.await_result(&ctx));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn each_envelope_gets_a_distinct_message_id() {
        let a = Envelope::<BaseMessage, ()>::for_tell(BaseMessage, Context::background());
        let b = Envelope::<BaseMessage, ()>::for_tell(BaseMessage, Context::background());
        assert_ne!(a.id, b.id);
    }
}
