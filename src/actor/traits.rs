//! The user-supplied message handler contract.

// Layer 1: Standard library imports
use std::error::Error;

// Layer 2: Third-party crate imports
use async_trait::async_trait;

// Layer 3: Internal module imports
use crate::context::Context;
use crate::message::Message;

/// What an actor actually does: receive a message under a process context
/// and produce a response or an error.
///
/// The optional `on_stop` hook is the runtime's `Stoppable` capability —
/// every behavior has one (default: a no-op), called exactly once during
/// termination after drain, bounded by the actor's `cleanup_timeout`.
/// Errors it returns are logged and never propagated.
///
/// # Example
/// ```
/// use tessera_rt::actor::Behavior;
/// use tessera_rt::context::Context;
/// use tessera_rt::message::{BaseMessage, Message};
/// use async_trait::async_trait;
///
/// struct Echo;
///
/// #[async_trait]
/// impl Behavior<BaseMessage, BaseMessage> for Echo {
///     type Error = std::convert::Infallible;
///
///     async fn receive(&mut self, _ctx: &Context, message: BaseMessage) -> Result<BaseMessage, Self::Error> {
///         Ok(message)
///     }
/// }
/// ```
#[async_trait]
pub trait Behavior<M: Message, R>: Send + 'static {
    /// The error type this behavior's `receive` and `on_stop` may return.
    type Error: Error + Send + Sync + 'static;

    /// Process one message under `ctx` — composed of the actor's own
    /// context and, for `ask`, the caller's context.
    async fn receive(&mut self, ctx: &Context, message: M) -> Result<R, Self::Error>;

    /// Called once during termination, after drain, bounded by
    /// `cleanup_timeout`. Default: no-op.
    async fn on_stop(&mut self, _ctx: &Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::BaseMessage;
    use std::convert::Infallible;

    struct CountingEcho {
        stopped: bool,
    }

    #[async_trait]
    impl Behavior<BaseMessage, u32> for CountingEcho {
        type Error = Infallible;

        async fn receive(&mut self, _ctx: &Context, _message: BaseMessage) -> Result<u32, Self::Error> {
            Ok(1)
        }

        async fn on_stop(&mut self, _ctx: &Context) -> Result<(), Self::Error> {
            self.stopped = true;
            Ok(())
        }
    }

    #[tokio::test]
    async fn default_on_stop_is_a_noop() {
        struct Bare;
        #[async_trait]
        impl Behavior<BaseMessage, ()> for Bare {
            type Error = Infallible;
            async fn receive(&mut self, _ctx: &Context, _message: BaseMessage) -> Result<(), Self::Error> {
                Ok(())
            }
        }
        let mut bare = Bare;
        assert!(bare.on_stop(&Context::background()).await.is_ok());
    }

    #[tokio::test]
    async fn on_stop_override_runs() {
        let mut echo = CountingEcho { stopped: false };
        echo.on_stop(&Context::background()).await.unwrap();
        assert!(echo.stopped);
    }
}
