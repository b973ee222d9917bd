// crates/usecase/src/dto.rs
use std::path::PathBuf;

use derive_builder::Builder;
use fw_version_stamp_shared_kernel::FirmwareVersion;

/// Input for a single stamping run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct StampRequest {
    /// Directory that contains `include/config.h`.
    pub project_root: PathBuf,
    /// Working directory of the invoking process; only used in diagnostics.
    #[builder(default)]
    pub working_dir: PathBuf,
    /// Compute the new version without writing it.
    #[builder(default)]
    pub dry_run: bool,
}

/// Outcome of a successful stamping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampReport {
    pub config_path: PathBuf,
    /// Quoted value of the declaration before stamping.
    pub previous: String,
    pub version: FirmwareVersion,
    /// Whether the new content differs from the old one.
    pub changed: bool,
    /// Whether the file was written (false on dry runs).
    pub written: bool,
}
