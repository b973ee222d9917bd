//! # Use Cases
//!
//! Application-level stamping logic.
//!
//! - [`declaration`]: Locating and rewriting the `FIRMWARE_VERSION` declaration
//! - [`dto`]: Request and report types at the use case boundary
//! - [`stamper`]: The read-modify-write use case itself
//!
//! Use cases depend on the shared kernel and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod declaration;
pub mod dto;
pub mod stamper;

pub use dto::{StampReport, StampRequest, StampRequestBuilder};
pub use stamper::{VersionStamper, config_path};
