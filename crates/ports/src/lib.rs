//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`clock`]: The source of "today" used for the build date
//! - [`environment`]: The project directory handed over by a hosting build tool
//! - [`store`]: Whole-file text access to the configuration header
//!
//! These ports keep the stamping use case independent of process state
//! and of the real filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod clock;
pub mod environment;
pub mod store;

pub use clock::Clock;
pub use environment::CallerEnvironment;
pub use store::TextStore;
