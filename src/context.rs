//! Cancellation/deadline context, composed between the actor that owns a
//! mailbox and the caller that sends into it.
//!
//! Rust has no ambient `context.Context` the way Go does, so this wraps
//! `tokio_util::sync::CancellationToken` — the ecosystem's composable
//! cancellation primitive — with an optional deadline. Composition (§4.3,
//! §9 of the design notes) spawns a small monitor task that cancels the
//! composed token when either parent cancels or the earlier deadline
//! elapses; the task is aborted automatically when the last clone of the
//! composed `Context` drops, which is how "release on every exit path,
//! including panics" is obtained for free from `Drop`.

// Layer 1: Standard library imports
use std::sync::Arc;
use std::time::Duration;

// Layer 2: Third-party crate imports
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

// Layer 3: Internal module imports
use crate::error::{CancelReason, RuntimeError};

struct MonitorGuard(JoinHandle<()>);

impl Drop for MonitorGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// A cancellation/deadline scope, cheap to clone and safe to share across
/// tasks.
#[derive(Clone)]
pub struct Context {
    cancel: CancellationToken,
    deadline: Option<Instant>,
    // Only `Some` for composed/derived contexts that own a background
    // monitor task; `None` for root contexts with nothing to clean up.
    _guard: Option<Arc<MonitorGuard>>,
}

impl Context {
    /// A context with no deadline and no parent — typically the root of an
    /// actor system or a single actor.
    pub fn background() -> Self {
        Self {
            cancel: CancellationToken::new(),
            deadline: None,
            _guard: None,
        }
    }

    /// A child of `self` that inherits its deadline and is cancelled
    /// whenever `self` is (directly, no extra monitor task required since
    /// `CancellationToken::child_token` already propagates cancellation).
    pub fn child(&self) -> Self {
        Self {
            cancel: self.cancel.child_token(),
            deadline: self.deadline,
            _guard: None,
        }
    }

    /// A child of `self` bounded by `timeout`, clamped to `self`'s own
    /// deadline if it is sooner.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = Some(match self.deadline {
            Some(existing) if existing < candidate => existing,
            _ => candidate,
        });
        let child = self.cancel.child_token();
        let handle = spawn_deadline_canceller(child.clone(), deadline);
        Self {
            cancel: child,
            deadline,
            _guard: Some(Arc::new(MonitorGuard(handle))),
        }
    }

    /// Compose an actor's context with a caller's context: the result
    /// cancels when either parent cancels, and inherits whichever deadline
    /// is sooner. This is the heart of `ask`'s process context (§4.3).
    pub fn compose(actor_ctx: &Context, caller_ctx: &Context) -> Self {
        let deadline = match (actor_ctx.deadline, caller_ctx.deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        let composed = CancellationToken::new();
        let handle = spawn_composition_monitor(
            composed.clone(),
            actor_ctx.cancel.clone(),
            caller_ctx.cancel.clone(),
            deadline,
        );
        Self {
            cancel: composed,
            deadline,
            _guard: Some(Arc::new(MonitorGuard(handle))),
        }
    }

    /// True if this context has already been cancelled (deadline or
    /// explicit cancel), without blocking.
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Resolves once this context cancels.
    pub async fn cancelled(&self) {
        self.cancel.cancelled().await;
    }

    /// Cancel this context directly (and every descendant derived from it).
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// The reason this context is cancelled, if it is. Used to surface
    /// `CancelReason::DeadlineExceeded` vs `CancelReason::Cancelled` to
    /// callers without guessing.
    pub fn cancel_reason(&self) -> Option<CancelReason> {
        if !self.is_cancelled() {
            return None;
        }
        let past_deadline = self.deadline.is_some_and(|d| Instant::now() >= d);
        Some(if past_deadline {
            CancelReason::DeadlineExceeded
        } else {
            CancelReason::Cancelled
        })
    }

    /// Convert this context's cancellation into a [`RuntimeError`], for use
    /// at an `await`/`send` boundary that just observed cancellation.
    pub fn as_error(&self) -> RuntimeError {
        RuntimeError::CallerCancelled(self.cancel_reason().unwrap_or(CancelReason::Cancelled))
    }
}

fn spawn_deadline_canceller(token: CancellationToken, deadline: Option<Instant>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = token.cancelled() => {}
                    _ = tokio::time::sleep_until(deadline) => token.cancel(),
                }
            }
            None => token.cancelled().await,
        }
    })
}

fn spawn_composition_monitor(
    composed: CancellationToken,
    actor_cancel: CancellationToken,
    caller_cancel: CancellationToken,
    deadline: Option<Instant>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match deadline {
            Some(deadline) => {
                tokio::select! {
                    _ = actor_cancel.cancelled() => composed.cancel(),
                    _ = caller_cancel.cancelled() => composed.cancel(),
                    _ = tokio::time::sleep_until(deadline) => composed.cancel(),
                }
            }
            None => {
                tokio::select! {
                    _ = actor_cancel.cancelled() => composed.cancel(),
                    _ = caller_cancel.cancelled() => composed.cancel(),
                }
            }
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn child_cancels_with_parent() {
        let parent = Context::background();
        let child = parent.child();
        assert!(!child.is_cancelled());
        parent.cancel();
        child.cancelled().await;
        assert!(child.is_cancelled());
    }

    #[tokio::test]
    async fn timeout_cancels_after_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_millis(20));
        assert!(!ctx.is_cancelled());
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(ctx.is_cancelled());
        assert_eq!(ctx.cancel_reason(), Some(CancelReason::DeadlineExceeded));
    }

    #[tokio::test]
    async fn compose_cancels_on_either_parent() {
        let actor_ctx = Context::background();
        let caller_ctx = Context::background();
        let composed = Context::compose(&actor_ctx, &caller_ctx);
        assert!(!composed.is_cancelled());

        caller_ctx.cancel();
        composed.cancelled().await;
        assert!(composed.is_cancelled());
    }

    #[tokio::test]
    async fn compose_inherits_earlier_deadline() {
        let actor_ctx = Context::background().with_timeout(Duration::from_millis(500));
        let caller_ctx = Context::background().with_timeout(Duration::from_millis(20));
        let composed = Context::compose(&actor_ctx, &caller_ctx);

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(composed.is_cancelled());
        assert_eq!(composed.cancel_reason(), Some(CancelReason::DeadlineExceeded));
    }

    #[tokio::test]
    async fn actor_cancellation_overrides_longer_caller_deadline() {
        let actor_ctx = Context::background();
        let caller_ctx = Context::background().with_timeout(Duration::from_secs(500));
        let composed = Context::compose(&actor_ctx, &caller_ctx);

        actor_ctx.cancel();
        composed.cancelled().await;
        assert!(composed.is_cancelled());
    }
}
