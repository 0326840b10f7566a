//! Bounded typed mailbox: a FIFO queue of envelopes with context-aware
//! send, close/drain, and a shared-reads/exclusive-close concurrency
//! discipline.

pub mod bounded;

pub use bounded::{bounded, Mailbox, MailboxSender};
