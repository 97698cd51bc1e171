//! Core calculators for the relocation marketplace back office.
//!
//! The engines in [`workflows`] are pure: every operation is a deterministic
//! function of its inputs with no I/O, no clock reads, and no shared mutable
//! state. The orchestration layer that feeds them (HTTP handlers, persistence,
//! retries) lives outside this crate; the bundled console binary is only a
//! demo consumer.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
