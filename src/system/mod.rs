//! The actor system: registration, discovery accessors, and deterministic
//! shutdown.
//!
//! # Module Organization
//!
//! - `config.rs` - `SystemConfig` and its builder
//! - `builder.rs` - `ActorSpawnBuilder`, the fluent registration surface
//! - `actor_system.rs` - `ActorSystem` itself

pub mod actor_system;
pub mod builder;
pub mod config;

pub use actor_system::ActorSystem;
pub use builder::ActorSpawnBuilder;
pub use config::{SystemConfig, SystemConfigBuilder};
