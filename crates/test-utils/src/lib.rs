//! Shared test utilities for the erddap-tools workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Dataset info feeds captured from real ERDDAP servers
//! - Builders for synthetic info feeds
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, InfoCsvBuilder};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;
