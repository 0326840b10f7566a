//! Public error taxonomy.
//!
//! All sentinel conditions named in the runtime's contract
//! (actor termination, receptionist type conflicts, empty routers) are
//! plain enum variants rather than opaque values, so callers can match on
//! them by identity with `matches!` or `if let`.

// Layer 1: Standard library imports
use std::fmt;

// Layer 2: Third-party crate imports
use thiserror::Error;

// Layer 3: Internal module imports
// (none)

/// Errors surfaced across the public API of the runtime.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// The target actor has stopped (or is in the process of stopping) and
    /// will never process this message.
    #[error("actor terminated")]
    ActorTerminated,

    /// A caller-side context cancelled (deadline or manual cancellation)
    /// before the actor could process the request.
    #[error("caller context cancelled: {0}")]
    CallerCancelled(#[from] CancelReason),

    /// A registration under `name` conflicts with an existing registration
    /// of a different message/response signature.
    #[error("service key {name:?} already registered as {existing}, rejecting {requested}")]
    ServiceKeyTypeMismatch {
        name: String,
        existing: String,
        requested: String,
    },

    /// A router was asked to deliver but no actor is currently registered
    /// under its key.
    #[error("no actors available for this service key")]
    NoActorsAvailable,

    /// The mailbox was closed directly (neither the actor's own context nor
    /// the caller's context had cancelled) — distinguished from
    /// [`RuntimeError::ActorTerminated`] so operators can tell "actor quit"
    /// from "someone closed this mailbox out from under a live actor" apart
    /// in logs and tests.
    #[error("mailbox closed")]
    MailboxClosed,

    /// The system's shutdown deadline elapsed before every actor joined.
    #[error("shutdown deadline exceeded")]
    ShutdownTimedOut,

    /// The behavior's `receive` returned an application error for an `ask`.
    /// Stringified rather than boxed because sentinel variants need to stay
    /// `Clone + Eq`; callers that need a structured error back should encode
    /// it inside their own response type instead.
    #[error("behavior error: {0}")]
    BehaviorFailed(String),
}

/// Why a [`crate::context::Context`] observed cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// An explicit `cancel()` call (or a parent's) fired.
    Cancelled,
    /// The context's deadline elapsed.
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "cancelled"),
            Self::DeadlineExceeded => write!(f, "deadline exceeded"),
        }
    }
}

impl std::error::Error for CancelReason {}
