//! The actor runtime core: lifecycle state, the `Behavior` contract, the
//! receive loop that drives a spawned actor, and the typed send handles
//! (`ActorRef`, `TellOnlyRef`, `BaseActorRef`, `MapInputRef`) callers use to
//! reach it.
//!
//! # Module Organization
//!
//! - `traits.rs` - the `Behavior` contract
//! - `lifecycle.rs` - `ActorState` and the atomic `Lifecycle` guard
//! - `actor.rs` - `spawn`, `ActorHandle`, and the receive loop
//! - `ref_.rs` - `ActorRef`, `TellOnlyRef`, `BaseActorRef`, `MapInputRef`
//!
//! # See Also
//!
//! - [`message`](crate::message) - the envelopes actors exchange
//! - [`system`](crate::system) - owns every actor's lifecycle end to end
//! - [`dlo`](crate::dlo) - where undeliverable messages land

pub mod actor;
pub mod lifecycle;
pub mod ref_;
pub mod traits;

pub use actor::{spawn, ActorHandle};
pub use lifecycle::{ActorState, Lifecycle};
pub use ref_::{BaseActorRef, MapInputRef, TellOnlyRef};
pub use ref_::ActorRef;
pub use traits::Behavior;
