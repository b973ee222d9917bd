// crates/shared-kernel/src/value_objects/mod.rs
pub mod build_date;
pub mod firmware_version;

pub use build_date::BuildDate;
pub use firmware_version::{FirmwareVersion, VersionPrefix};
