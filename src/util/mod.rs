//! Identity helpers shared across the runtime.

pub mod ids;

pub use ids::{ActorId, MessageId};
