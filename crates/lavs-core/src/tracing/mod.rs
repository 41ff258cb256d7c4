//! Observability for LAVS.
//! `tracing` crate with `EnvFilter`, per-crate log levels via `LAVS_LOG`.

pub mod events;
pub mod setup;

pub use setup::init_tracing;
