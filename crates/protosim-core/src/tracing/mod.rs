//! Observability for protosim.
//! `tracing` crate with `EnvFilter`, structured events for simulation milestones.

pub mod events;
pub mod setup;

pub use setup::{init_tracing, init_tracing_with_level};
