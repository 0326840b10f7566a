//! Single-shot result container shared between an `ask`'s envelope and the
//! future the caller awaits.

// Layer 1: Standard library imports
use std::sync::Arc;

// Layer 2: Third-party crate imports
use parking_lot::Mutex;
use tokio::sync::Notify;

// Layer 3: Internal module imports
use crate::context::Context;
use crate::error::RuntimeError;

struct Inner<R> {
    slot: Mutex<Option<Result<R, RuntimeError>>>,
    notify: Notify,
}

/// The write side of a one-shot result slot. Held by the envelope; the
/// actor loop completes it exactly once.
pub struct Promise<R> {
    inner: Arc<Inner<R>>,
}

/// The read side of a one-shot result slot, returned to an `ask` caller.
pub struct Future<R> {
    inner: Arc<Inner<R>>,
}

/// Create a linked promise/future pair.
pub fn pair<R>() -> (Promise<R>, Future<R>) {
    let inner = Arc::new(Inner {
        slot: Mutex::new(None),
        notify: Notify::new(),
    });
    (
        Promise {
            inner: Arc::clone(&inner),
        },
        Future { inner },
    )
}

impl<R> Promise<R> {
    /// Store `result` if the promise is still empty; subsequent calls are
    /// silent no-ops. Safe to call from any thread.
    pub fn complete(&self, result: Result<R, RuntimeError>) {
        let mut slot = self.inner.slot.lock();
        if slot.is_none() {
            *slot = Some(result);
            drop(slot);
            self.inner.notify.notify_waiters();
        }
    }
}

impl<R: Clone> Future<R> {
    /// Await the result, resolving either when [`Promise::complete`] runs
    /// or when `ctx` cancels — whichever happens first. A result that
    /// arrives concurrently with cancellation wins (we always re-check the
    /// slot before surfacing the context's error).
    pub async fn await_result(&self, ctx: &Context) -> Result<R, RuntimeError> {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            // Register for the wakeup before checking the slot, otherwise a
            // `complete()` landing between the check and the first poll of
            // `notified` wakes nobody and we hang until `ctx` cancels.
            notified.as_mut().enable();
            if let Some(result) = self.inner.slot.lock().clone() {
                return result;
            }
            tokio::select! {
                biased;
                _ = &mut notified => continue,
                _ = ctx.cancelled() => {
                    if let Some(result) = self.inner.slot.lock().clone() {
                        return result;
                    }
                    return Err(ctx.as_error());
                }
            }
        }
    }
}

impl<R> Clone for Future<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_once_and_is_observed() {
        let (promise, future) = pair::<u32>();
        promise.complete(Ok(42));
        promise.complete(Ok(99)); // no-op

        let ctx = Context::background();
        assert_eq!(future.await_result(&ctx).await, Ok(42));
    }

    #[tokio::test]
    async fn await_blocks_until_complete() {
        let (promise, future) = pair::<u32>();
        let ctx = Context::background();

        let fut2 = future.clone();
        let ctx2 = ctx.clone();
        let handle = tokio::spawn(async move { fut2.await_result(&ctx2).await });

        tokio::task::yield_now().await;
        promise.complete(Ok(7));

        assert_eq!(handle.await.unwrap(), Ok(7));
    }

    #[tokio::test]
    async fn cancellation_without_completion_surfaces_context_error() {
        let (_promise, future) = pair::<u32>();
        let ctx = Context::background();
        ctx.cancel();

        let result = future.await_result(&ctx).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn multiple_awaiters_observe_same_outcome() {
        let (promise, future) = pair::<u32>();
        promise.complete(Ok(5));

        let ctx = Context::background();
        assert_eq!(future.await_result(&ctx).await, Ok(5));
        assert_eq!(future.await_result(&ctx).await, Ok(5));
    }
}
