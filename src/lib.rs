//! # tessera-rt — a typed actor runtime
//!
//! An in-process actor runtime: actor lifecycle, statically typed `tell`/
//! `ask` message passing, a receptionist for typed service discovery, a
//! load-balancing router, a dead-letter office for undeliverable messages,
//! and deterministic shutdown that joins every actor.
//!
//! # Quick Start
//!
//! ```rust
//! use async_trait::async_trait;
//! use tessera_rt::actor::Behavior;
//! use tessera_rt::context::Context;
//! use tessera_rt::message::{BaseMessage, Message};
//! use tessera_rt::system::{ActorSystem, SystemConfig};
//! use tessera_rt::util::ActorId;
//!
//! struct Counter {
//!     count: u64,
//! }
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Increment;
//!
//! impl Message for Increment {
//!     const MESSAGE_TYPE: &'static str = "increment";
//! }
//!
//! #[async_trait]
//! impl Behavior<Increment, u64> for Counter {
//!     type Error = std::convert::Infallible;
//!
//!     async fn receive(&mut self, _ctx: &Context, _message: Increment) -> Result<u64, Self::Error> {
//!         self.count += 1;
//!         Ok(self.count)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::new(SystemConfig::default());
//!     let counter = system.spawn(ActorId::new("counter"), Counter { count: 0 }).register().await;
//!
//!     let caller_ctx = Context::background();
//!     let total = counter.ask(&caller_ctx, Increment).await.unwrap();
//!     assert_eq!(total, 1);
//!
//!     system.shutdown_default().await.unwrap();
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`actor`] - `Behavior`, `ActorRef`/`TellOnlyRef`/`MapInputRef`, lifecycle, the receive loop
//! - [`message`] - `Message` contract and the `Envelope` actors exchange
//! - [`mailbox`] - the bounded, context-aware queue feeding each actor
//! - [`context`] - cancellation/deadline composition between actor and caller
//! - [`promise`] - the one-shot result slot behind every `ask`
//! - [`dlo`] - the dead-letter office and its message type
//! - [`receptionist`] - typed service discovery
//! - [`router`] - load-balancing and broadcast over a receptionist key
//! - [`system`] - `ActorSystem`: registration, discovery, shutdown
//! - [`logger`] - the injectable logging sink
//! - [`error`] - the public `RuntimeError` taxonomy
//! - [`util`] - `ActorId`/`MessageId`
//!
//! # See Also
//!
//! - [`prelude`] - the common imports for building on this runtime

pub mod actor;
pub mod context;
pub mod dlo;
pub mod error;
pub mod logger;
pub mod mailbox;
pub mod message;
pub mod prelude;
pub mod promise;
pub mod receptionist;
pub mod router;
pub mod system;
pub mod util;

pub use actor::{ActorRef, Behavior, MapInputRef, TellOnlyRef};
pub use context::Context;
pub use dlo::DeadLetter;
pub use error::RuntimeError;
pub use message::{BaseMessage, Message};
pub use receptionist::{Receptionist, ServiceKey};
pub use router::Router;
pub use system::{ActorSystem, SystemConfig};
pub use util::{ActorId, MessageId};
