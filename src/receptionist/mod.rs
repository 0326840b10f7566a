//! Typed service discovery: actors register under a [`ServiceKey`] name and
//! are found again by routers or by direct lookup.

pub mod registry;
pub mod service_key;

pub use registry::Receptionist;
pub use service_key::ServiceKey;
