//! # Shared Kernel
//!
//! Error taxonomy and value objects used by every crate in the workspace.

// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{Result, StampError};

pub mod error;
pub mod value_objects;

pub use value_objects::{BuildDate, FirmwareVersion, VersionPrefix};
