//! A load-balancing virtual ref over a receptionist registration list.

pub mod router;
pub mod strategy;

pub use router::Router;
pub use strategy::{RoundRobin, Strategy};
