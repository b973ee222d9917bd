// src/lib.rs
//! Pre-build hook that refreshes the build-date field of
//! `#define FIRMWARE_VERSION "M.V.T.YYMMDD"` in `include/config.h`.
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod parsers;
pub mod presentation;

pub use app::{run_hosted, run_standalone, stamp};
pub use fw_version_stamp_ports::CallerEnvironment;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
