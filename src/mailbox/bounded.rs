//! Bounded, context-aware mailbox.
//!
//! Concurrency invariant (the heart of correctness): sends take a shared
//! access token for their entire send attempt, close takes an exclusive
//! token. Because close requires exclusivity, no send can observe a closed
//! underlying queue mid-flight — the `tokio::sync::RwLock<()>` below is
//! that gate. `parking_lot`'s lock is not used here because its guards are
//! not reliably `Send` across an `.await` point, and a send attempt must
//! hold its guard across the (possibly suspending) channel send.

// Layer 1: Standard library imports
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Layer 2: Third-party crate imports
use tokio::sync::{mpsc, RwLock};

// Layer 3: Internal module imports
use crate::context::Context;
use crate::message::{Envelope, Message};

/// A requested capacity of 0 is promoted to 1 so every mailbox is buffered.
fn normalize_capacity(requested: usize) -> usize {
    requested.max(1)
}

struct Shared {
    closed: AtomicBool,
    gate: RwLock<()>,
}

/// The receiving half of a bounded mailbox. Owned exclusively by the actor
/// whose mailbox this is — never cloned, never shared.
pub struct Mailbox<M: Message, R> {
    rx: mpsc::Receiver<Envelope<M, R>>,
    shared: Arc<Shared>,
}

/// The sending half of a bounded mailbox. Cheap to clone; every `ActorRef`
/// holds one.
pub struct MailboxSender<M: Message, R> {
    tx: mpsc::Sender<Envelope<M, R>>,
    shared: Arc<Shared>,
}

impl<M: Message, R> Clone for MailboxSender<M, R> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Create a bounded mailbox pair. `capacity` of 0 is normalized to 1.
pub fn bounded<M: Message, R>(capacity: usize) -> (MailboxSender<M, R>, Mailbox<M, R>) {
    let (tx, rx) = mpsc::channel(normalize_capacity(capacity));
    let shared = Arc::new(Shared {
        closed: AtomicBool::new(false),
        gate: RwLock::new(()),
    });
    (
        MailboxSender {
            tx,
            shared: Arc::clone(&shared),
        },
        Mailbox { rx, shared },
    )
}

impl<M: Message, R> MailboxSender<M, R> {
    /// Blocks until one of: accepted (`true`), `ctx` cancels, the actor's
    /// own context cancels, or the mailbox is closed (all `false`). Never
    /// panics on send-to-closed.
    pub async fn send(&self, ctx: &Context, actor_ctx: &Context, envelope: Envelope<M, R>) -> bool {
        if ctx.is_cancelled() || actor_ctx.is_cancelled() || self.is_closed() {
            return false;
        }
        let _guard = self.shared.gate.read().await;
        if self.shared.closed.load(Ordering::Acquire) {
            return false;
        }
        tokio::select! {
            biased;
            _ = ctx.cancelled() => false,
            _ = actor_ctx.cancelled() => false,
            result = self.tx.send(envelope) => result.is_ok(),
        }
    }

    /// Never blocks; `false` if full, closed, or the actor context is
    /// already cancelled.
    pub fn try_send(&self, actor_ctx: &Context, envelope: Envelope<M, R>) -> bool {
        if actor_ctx.is_cancelled() || self.is_closed() {
            return false;
        }
        let Ok(_guard) = self.shared.gate.try_read() else {
            return false;
        };
        if self.shared.closed.load(Ordering::Acquire) {
            return false;
        }
        self.tx.try_send(envelope).is_ok()
    }

    /// Lock-free fast-path check mirroring the locked `closed` state.
    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }
}

impl<M: Message, R> Mailbox<M, R> {
    /// Idempotent; prevents further sends, drainable thereafter.
    pub async fn close(&self) {
        let _guard = self.shared.gate.write().await;
        self.shared.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::Acquire)
    }

    /// Yields the next accepted envelope in FIFO order; resolves to `None`
    /// once the mailbox is closed and drained, or `ctx` cancels.
    /// Cancellation is checked before every dequeue attempt, which is what
    /// makes shutdown deterministic rather than racing the channel.
    pub async fn recv(&mut self, ctx: &Context) -> Option<Envelope<M, R>> {
        if ctx.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = ctx.cancelled() => None,
            item = self.rx.recv() => item,
        }
    }

    /// Yields the remaining accepted-but-undelivered envelopes without
    /// blocking, in FIFO order. Empty if the mailbox is not yet closed.
    pub fn drain(&mut self) -> Vec<Envelope<M, R>> {
        if !self.is_closed() {
            return Vec::new();
        }
        let mut out = Vec::new();
        while let Ok(envelope) = self.rx.try_recv() {
            out.push(envelope);
        }
        out
    }
}
