//! Common imports for building on `tessera-rt`.
//!
//! ```rust
//! use tessera_rt::prelude::*;
//! ```

pub use crate::actor::{ActorRef, Behavior, MapInputRef, TellOnlyRef};
pub use crate::context::Context;
pub use crate::dlo::DeadLetter;
pub use crate::error::RuntimeError;
pub use crate::logger::{Logger, NoopLogger, TracingLogger};
pub use crate::message::{BaseMessage, Message};
pub use crate::receptionist::{Receptionist, ServiceKey};
pub use crate::router::{RoundRobin, Router, Strategy};
pub use crate::system::{ActorSystem, SystemConfig};
pub use crate::util::{ActorId, MessageId};
