//! Subcommand implementations.
//!
//! Each command writes its user-facing output to the given writer; logs go
//! through `tracing` to stderr.

pub mod describe;
pub mod fetch;
pub mod search;
pub mod servers;
